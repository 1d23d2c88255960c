use server::config::StorageMode;
use uuid::Uuid;

use crate::common::{TestApp, TestResponse, routes};

const JPEG_BYTES: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46];

mod gallery {
    use super::*;

    #[tokio::test]
    async fn uploads_are_listed_in_order_and_unfavorited() {
        let app = TestApp::spawn().await;
        app.upsert_project("gia@example.com", "Engagement", "Proofing")
            .await;

        app.upload_photo("gia@example.com", "one.jpg", JPEG_BYTES).await;
        app.upload_photo("gia@example.com", "two.jpg", JPEG_BYTES).await;
        app.upload_photo("gia@example.com", "three.jpg", JPEG_BYTES).await;

        let list = app.get(&routes::photos("gia@example.com")).await;
        assert_eq!(list.status, 200, "{}", list.text);
        let items = list.body.as_array().expect("photo list");
        assert_eq!(items.len(), 3);

        let filenames: Vec<&str> = items
            .iter()
            .map(|p| p["filename"].as_str().unwrap())
            .collect();
        assert_eq!(filenames, ["one.jpg", "two.jpg", "three.jpg"]);
        assert!(items.iter().all(|p| p["is_favorite"] == false));
    }

    #[tokio::test]
    async fn upload_requires_an_existing_project() {
        let app = TestApp::spawn().await;

        let res = app
            .upload(
                &routes::photos("stranger@example.com"),
                "x.jpg",
                JPEG_BYTES.to_vec(),
            )
            .await;
        assert_eq!(res.status, 404, "{}", res.text);
        assert_eq!(res.body["code"], "NOT_FOUND");

        let list = app.get(&routes::photos("stranger@example.com")).await;
        assert_eq!(list.body.as_array().expect("photo list").len(), 0);
    }

    #[tokio::test]
    async fn upload_without_file_field_is_rejected() {
        let app = TestApp::spawn().await;
        app.upsert_project("kim@example.com", "Pets", "Booked").await;

        let form = reqwest::multipart::Form::new().text("note", "no file here");
        let res = app
            .client
            .post(format!(
                "http://{}{}",
                app.addr,
                routes::photos("kim@example.com")
            ))
            .multipart(form)
            .send()
            .await
            .expect("Failed to send multipart request");
        let res = TestResponse::from_response(res).await;

        assert_eq!(res.status, 400, "{}", res.text);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }
}

mod content {
    use super::*;

    #[tokio::test]
    async fn round_trips_inline() {
        let app = TestApp::spawn().await;
        app.upsert_project("ivy@example.com", "Maternity", "Proofing")
            .await;
        let id = app
            .upload_photo("ivy@example.com", "belly.jpg", JPEG_BYTES)
            .await;

        let (status, content_type, bytes) = app.get_bytes(&routes::photo_content(&id)).await;
        assert_eq!(status, 200);
        assert_eq!(content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(bytes, JPEG_BYTES);
    }

    #[tokio::test]
    async fn round_trips_through_media_dir() {
        let app = TestApp::spawn_with_mode(StorageMode::Filesystem).await;
        app.upsert_project("jon@example.com", "Graduation", "Proofing")
            .await;
        let id = app
            .upload_photo("jon@example.com", "cap.jpg", JPEG_BYTES)
            .await;

        let meta = app.get(&routes::photo(&id)).await;
        assert_eq!(meta.status, 200);

        let (status, content_type, bytes) = app.get_bytes(&routes::photo_content(&id)).await;
        assert_eq!(status, 200);
        assert_eq!(content_type.as_deref(), Some("image/jpeg"));
        assert_eq!(bytes, JPEG_BYTES);
    }
}

mod favorites {
    use super::*;

    #[tokio::test]
    async fn toggle_flips_and_flips_back() {
        let app = TestApp::spawn().await;
        app.upsert_project("hal@example.com", "Headshots", "Proofing")
            .await;
        let id = app
            .upload_photo("hal@example.com", "pick.jpg", JPEG_BYTES)
            .await;

        let res = app.post_empty(&routes::photo_favorite(&id)).await;
        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["id"], id.as_str());
        assert_eq!(res.body["is_favorite"], true);

        let res = app.post_empty(&routes::photo_favorite(&id)).await;
        assert_eq!(res.body["is_favorite"], false);

        // The stored flag matches what the last toggle reported.
        let fetched = app.get(&routes::photo(&id)).await;
        assert_eq!(fetched.status, 200);
        assert_eq!(fetched.body["is_favorite"], false);
    }

    #[tokio::test]
    async fn toggle_unknown_photo_returns_not_found() {
        let app = TestApp::spawn().await;

        let id = Uuid::now_v7().to_string();
        let res = app.post_empty(&routes::photo_favorite(&id)).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }
}
