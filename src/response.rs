// src/response.rs
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Response};
use maud::{DOCTYPE, Markup, html};

/// Pełny szkielet strony z treścią wstawioną w `#content`.
fn render_layout(content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "SportsStore" }
                script src="https://unpkg.com/htmx.org@2.0.4" {}
                script src="https://cdn.tailwindcss.com" {}
            }
            body ."bg-gray-50" {
                header ."bg-gray-900 text-white p-4" {
                    a href="/" class="text-xl font-semibold" { "SPORTS STORE" }
                }
                main #content ."max-w-4xl mx-auto p-4" {
                    (content)
                }
            }
        }
    }
}

pub fn build_response(headers: &HeaderMap, page_content: Markup) -> Response {
    if headers.contains_key("HX-Request") {
        // Dla żądań HTMX zwracamy tylko fragment HTML
        page_content.into_response()
    } else {
        render_layout(page_content).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn layout_wraps_content() {
        let page = render_layout(html! { p { "treść" } }).into_string();
        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains(r#"<main class="max-w-4xl mx-auto p-4" id="content">"#));
        assert!(page.contains("<p>treść</p>"));
    }

    async fn body_of(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn htmx_request_gets_fragment_only() {
        let mut headers = HeaderMap::new();
        headers.insert("HX-Request", HeaderValue::from_static("true"));
        let response = build_response(&headers, html! { p { "fragment" } });
        assert_eq!(response.status(), axum::http::StatusCode::OK);

        let body = body_of(response).await;
        assert_eq!(body, "<p>fragment</p>");
        assert!(!body.contains("<!DOCTYPE html>"));
    }

    #[tokio::test]
    async fn plain_request_gets_full_layout() {
        let response = build_response(&HeaderMap::new(), html! { p { "cała strona" } });
        assert_eq!(response.status(), axum::http::StatusCode::OK);

        let body = body_of(response).await;
        assert!(body.starts_with("<!DOCTYPE html>"));
        assert!(body.contains(r#"id="content"><p>cała strona</p></main>"#));
    }
}
