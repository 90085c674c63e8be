use axum::response::Html;

/// Landing page listing the available routes.
#[utoipa::path(
    get,
    path = "/",
    tag = "Home",
    responses(
        (status = 200, description = "HTML listing of available routes", body = String, content_type = "text/html"),
    )
)]
pub async fn home() -> Html<&'static str> {
    Html(
        "Welcome to the Climate Analysis API!<br/>\
         Available Routes:<br/>\
         /api/v1.0/precipitation<br/>\
         /api/v1.0/stations<br/>\
         /api/v1.0/tobs<br/>\
         /api/v1.0/&lt;start&gt;<br/>\
         /api/v1.0/&lt;start&gt;/&lt;end&gt;<br/>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_home_lists_all_data_routes() {
        let Html(body) = home().await;
        assert!(body.contains("/api/v1.0/precipitation"));
        assert!(body.contains("/api/v1.0/stations"));
        assert!(body.contains("/api/v1.0/tobs"));
        assert!(body.contains("&lt;start&gt;"));
        assert!(body.contains("&lt;start&gt;/&lt;end&gt;"));
    }
}
