use crate::e2e::helpers;

use helpers::{default_presenter_url, TestContext};
use hyper::StatusCode;
use test_context::test_context;

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_list_presenters_with_default(ctx: &TestContext) {
    let response = ctx.client.get("/presenters").await.unwrap();

    response.assert_status(StatusCode::OK);

    let default = response.field("default").as_str().unwrap();
    let presenters = response.field("presenters").as_object().unwrap();

    assert_eq!(default, "alice");
    assert!(presenters.len() > 1);
    assert_eq!(
        presenters.get(default).and_then(|v| v.as_str()),
        Some(default_presenter_url())
    );
    for (name, url) in presenters {
        assert!(
            url.as_str().unwrap().starts_with("https://"),
            "presenter {} has no image url",
            name
        );
    }
}
