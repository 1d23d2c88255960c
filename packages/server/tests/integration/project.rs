use rust_decimal::Decimal;
use serde_json::json;

use crate::common::{TestApp, dec, routes};

fn d(s: &str) -> Decimal {
    s.parse().expect("decimal literal")
}

mod upsert {
    use super::*;

    #[tokio::test]
    async fn creates_project_with_derived_progress() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::PROJECTS,
                &json!({
                    "client_email": "ana@example.com",
                    "project_name": "Wedding 2026",
                    "status": "Post-Production",
                    "gallery_link": "https://gallery.example.com/ana",
                    "total_price": "1200.25",
                    "amount_paid": "450.25",
                }),
            )
            .await;

        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["client_email"], "ana@example.com");
        assert_eq!(res.body["status"], "Post-Production");
        assert_eq!(res.body["progress"], 45);
        assert_eq!(res.body["delivered"], false);
        assert_eq!(res.body["gallery_link"], "https://gallery.example.com/ana");
        assert_eq!(dec(&res.body["balance_due"]), d("750.00"));

        // GET must return the same record.
        let fetched = app.get(&routes::project("ana@example.com")).await;
        assert_eq!(fetched.status, 200, "{}", fetched.text);
        assert_eq!(fetched.body["project_name"], "Wedding 2026");
        assert_eq!(fetched.body["progress"], 45);
    }

    #[tokio::test]
    async fn same_email_updates_in_place() {
        let app = TestApp::spawn().await;

        app.upsert_project("bob@example.com", "Portrait", "Inquiry")
            .await;
        let res = app
            .upsert_project("bob@example.com", "Portrait session", "Booked")
            .await;
        assert_eq!(res.body["status"], "Booked");
        assert_eq!(res.body["progress"], 20);
        assert_eq!(res.body["project_name"], "Portrait session");

        // Still a single row for this email.
        let list = app.get(routes::PROJECTS).await;
        let items = list.body.as_array().expect("project list");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["client_email"], "bob@example.com");
    }

    #[tokio::test]
    async fn unknown_stage_is_rejected_without_a_write() {
        let app = TestApp::spawn().await;

        app.upsert_project("carla@example.com", "Family shoot", "Booked")
            .await;

        let res = app
            .post(
                routes::PROJECTS,
                &json!({
                    "client_email": "carla@example.com",
                    "project_name": "Family shoot",
                    "status": "Editting",
                }),
            )
            .await;
        assert_eq!(res.status, 400, "{}", res.text);
        assert_eq!(res.body["code"], "UNKNOWN_STAGE");
        assert!(res.body["message"].as_str().unwrap().contains("Editting"));

        // The stored record is untouched.
        let fetched = app.get(&routes::project("carla@example.com")).await;
        assert_eq!(fetched.body["status"], "Booked");
        assert_eq!(fetched.body["progress"], 20);
    }

    #[tokio::test]
    async fn unknown_stage_on_new_email_creates_nothing() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::PROJECTS,
                &json!({
                    "client_email": "nobody@example.com",
                    "project_name": "Ghost",
                    "status": "Shipped",
                }),
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "UNKNOWN_STAGE");

        let fetched = app.get(&routes::project("nobody@example.com")).await;
        assert_eq!(fetched.status, 404);
        assert_eq!(fetched.body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn invalid_email_is_rejected() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::PROJECTS,
                &json!({
                    "client_email": "   ",
                    "project_name": "No client",
                    "status": "Inquiry",
                }),
            )
            .await;
        assert_eq!(res.status, 400, "{}", res.text);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");

        let res = app
            .post(
                routes::PROJECTS,
                &json!({
                    "client_email": "not-an-address",
                    "project_name": "No at sign",
                    "status": "Inquiry",
                }),
            )
            .await;
        assert_eq!(res.status, 400);
        assert_eq!(res.body["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn delivered_stage_marks_project_delivered() {
        let app = TestApp::spawn().await;

        let res = app
            .post(
                routes::PROJECTS,
                &json!({
                    "client_email": "dora@example.com",
                    "project_name": "Newborn",
                    "status": "Delivered",
                    "gallery_link": "https://gallery.example.com/dora",
                }),
            )
            .await;
        assert_eq!(res.status, 200, "{}", res.text);
        assert_eq!(res.body["progress"], 100);
        assert_eq!(res.body["delivered"], true);
        assert_eq!(res.body["gallery_link"], "https://gallery.example.com/dora");
    }

    #[tokio::test]
    async fn stage_can_move_backward() {
        let app = TestApp::spawn().await;

        app.upsert_project("eli@example.com", "Event", "Delivered")
            .await;
        let res = app
            .upsert_project("eli@example.com", "Event", "Proofing")
            .await;
        assert_eq!(res.body["status"], "Proofing");
        assert_eq!(res.body["progress"], 70);
        assert_eq!(res.body["delivered"], false);
    }

    #[tokio::test]
    async fn omitted_optional_fields_are_preserved_on_update() {
        let app = TestApp::spawn().await;

        app.post(
            routes::PROJECTS,
            &json!({
                "client_email": "fay@example.com",
                "project_name": "Branding",
                "status": "Booked",
                "gallery_link": "https://gallery.example.com/fay",
                "total_price": "800",
                "amount_paid": "200",
            }),
        )
        .await;

        // Stage-only update with no financials and no link.
        let res = app
            .upsert_project("fay@example.com", "Branding", "Proofing")
            .await;
        assert_eq!(res.body["status"], "Proofing");
        assert_eq!(res.body["gallery_link"], "https://gallery.example.com/fay");
        assert_eq!(dec(&res.body["total_price"]), d("800"));
        assert_eq!(dec(&res.body["amount_paid"]), d("200"));
        assert_eq!(dec(&res.body["balance_due"]), d("600"));
    }
}

mod lookup {
    use super::*;

    #[tokio::test]
    async fn list_orders_most_recent_first() {
        let app = TestApp::spawn().await;

        app.upsert_project("a@example.com", "First", "Inquiry").await;
        app.upsert_project("b@example.com", "Second", "Inquiry").await;
        app.upsert_project("c@example.com", "Third", "Inquiry").await;

        let list = app.get(routes::PROJECTS).await;
        let emails: Vec<&str> = list
            .body
            .as_array()
            .expect("project list")
            .iter()
            .map(|p| p["client_email"].as_str().unwrap())
            .collect();
        assert_eq!(emails, ["c@example.com", "b@example.com", "a@example.com"]);
    }

    #[tokio::test]
    async fn missing_project_returns_not_found() {
        let app = TestApp::spawn().await;

        let res = app.get(&routes::project("missing@example.com")).await;
        assert_eq!(res.status, 404);
        assert_eq!(res.body["code"], "NOT_FOUND");
    }
}
