// src/htmx_handlers.rs

use axum::{
    extract::{Path, State},
    http::HeaderMap,
    response::Response,
};
use maud::{Markup, html};

use crate::{
    errors::AppError, models::ProductsListViewModel, pagination::PagingInfo,
    response::build_response, services, state::AppState,
};

// Cena w groszach -> "1234,50 zł"
fn format_price_maud(price: i64) -> String {
    let sign = if price < 0 { "-" } else { "" };
    let minor_units = price.unsigned_abs();
    format!("{}{},{:02} zł", sign, minor_units / 100, minor_units % 100)
}

fn page_url(page: i64) -> String {
    if page <= 1 {
        "/".to_string()
    } else {
        format!("/page/{}", page)
    }
}

pub fn render_page_links_maud(paging_info: &PagingInfo) -> Markup {
    html! {
        @if paging_info.total_pages > 1 {
            nav #pagination-controls ."mt-8 flex justify-center items-center space-x-1" {
                @if paging_info.has_previous_page() {
                    a href=(page_url(paging_info.current_page - 1))
                        "hx-get"=(page_url(paging_info.current_page - 1))
                        "hx-target"="#content" "hx-swap"="innerHTML"
                        "hx-push-url"="true"
                        class="page-nav px-3 py-2 border rounded-md text-sm font-medium text-gray-700 bg-white hover:bg-gray-100" {
                        "Poprzednia"
                    }
                } @else {
                    span class="page-nav px-3 py-2 border rounded-md text-sm font-medium text-gray-400 bg-gray-50 cursor-not-allowed" { "Poprzednia" }
                }
                @for page_num in 1..=paging_info.total_pages {
                    @if page_num == paging_info.current_page {
                        span class="page-link selected px-3 py-2 border rounded-md text-sm font-medium text-white bg-gray-900" { (page_num) }
                    } @else {
                        a href=(page_url(page_num))
                            "hx-get"=(page_url(page_num))
                            "hx-target"="#content" "hx-swap"="innerHTML"
                            "hx-push-url"="true"
                            class="page-link px-3 py-2 border rounded-md text-sm font-medium text-gray-700 bg-white hover:bg-gray-100" {
                            (page_num)
                        }
                    }
                }
                @if paging_info.has_next_page() {
                    a href=(page_url(paging_info.current_page + 1))
                        "hx-get"=(page_url(paging_info.current_page + 1))
                        "hx-target"="#content" "hx-swap"="innerHTML"
                        "hx-push-url"="true"
                        class="page-nav px-3 py-2 border rounded-md text-sm font-medium text-gray-700 bg-white hover:bg-gray-100" {
                        "Następna"
                    }
                } @else {
                    span class="page-nav px-3 py-2 border rounded-md text-sm font-medium text-gray-400 bg-gray-50 cursor-not-allowed" { "Następna" }
                }
            }
        }
    }
}

pub fn render_product_list_maud(view_model: &ProductsListViewModel) -> Markup {
    html! {
        div #product-list {
            @if view_model.products.is_empty() {
                p ."text-center text-gray-500 py-8" { "Brak produktów na tej stronie." }
            } @else {
                @for product in &view_model.products {
                    div ."product border rounded-lg p-4 mb-3 bg-white shadow-sm" {
                        h3 ."flex justify-between text-lg font-semibold" {
                            span { (product.name) }
                            span ."text-gray-800" { (format_price_maud(product.price)) }
                        }
                        p ."text-gray-600" { (product.description) }
                        p ."text-xs text-gray-500" { "Kategoria: " (product.category) }
                    }
                }
            }
            (render_page_links_maud(&view_model.paging_info))
        }
    }
}

async fn render_listing_page(
    app_state: &AppState,
    headers: &HeaderMap,
    page: i64,
) -> Result<Response, AppError> {
    let view_model = services::list_products(app_state, page).await?;
    Ok(build_response(headers, render_product_list_maud(&view_model)))
}

pub async fn index_handler(
    State(app_state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    tracing::info!("MAUD: / - pierwsza strona produktów");
    render_listing_page(&app_state, &headers, 1).await
}

pub async fn product_page_handler(
    State(app_state): State<AppState>,
    Path(page): Path<i64>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    tracing::info!("MAUD: /page/{} - strona produktów", page);
    render_listing_page(&app_state, &headers, page).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Product;

    fn view_model(ids: &[i64], info: PagingInfo) -> ProductsListViewModel {
        ProductsListViewModel {
            products: ids
                .iter()
                .map(|id| Product::new(*id, format!("P{id}"), "opis", 1950, "Soccer"))
                .collect(),
            paging_info: info,
        }
    }

    #[test]
    fn price_uses_comma_and_currency() {
        assert_eq!(format_price_maud(1950), "19,50 zł");
        assert_eq!(format_price_maud(27500), "275,00 zł");
        assert_eq!(format_price_maud(7950000), "79500,00 zł");
        assert_eq!(format_price_maud(5), "0,05 zł");
        assert_eq!(format_price_maud(-1250), "-12,50 zł");
    }

    #[test]
    fn middle_page_links_both_directions() {
        let markup = render_page_links_maud(&PagingInfo::new(2, 3, 9)).into_string();

        assert!(markup.contains(">Poprzednia</a>"));
        assert!(markup.contains(">Następna</a>"));
        assert!(!markup.contains("cursor-not-allowed"));
    }

    #[test]
    fn first_page_disables_previous() {
        let markup = render_page_links_maud(&PagingInfo::new(1, 3, 9)).into_string();

        assert!(markup.contains(">Poprzednia</span>"));
        assert!(!markup.contains(">Poprzednia</a>"));
        assert!(markup.contains(">Następna</a>"));
        assert!(markup.contains(r#"hx-get="/page/2""#));
    }

    #[test]
    fn last_page_disables_next() {
        let markup = render_page_links_maud(&PagingInfo::new(3, 3, 9)).into_string();

        assert!(markup.contains(">Poprzednia</a>"));
        assert!(markup.contains(">Następna</span>"));
        assert!(!markup.contains(">Następna</a>"));
    }

    #[test]
    fn page_zero_highlights_nothing_and_links_forward_to_first() {
        let markup = render_page_links_maud(&PagingInfo::new(0, 3, 9)).into_string();

        assert!(!markup.contains("page-link selected"));
        assert!(markup.contains(">Poprzednia</span>"));
        assert!(markup.contains(r#"<a href="/""#));
        assert!(markup.contains(">Następna</a>"));
    }

    #[test]
    fn can_generate_page_links() {
        let markup = render_page_links_maud(&PagingInfo::new(2, 10, 28)).into_string();

        assert!(markup.contains(r#"href="/""#));
        assert!(markup.contains(r#"href="/page/3""#));
        assert!(markup.contains(r#"<span class="page-link selected"#));
        assert!(!markup.contains(r#"href="/page/2""#));
        assert!(!markup.contains(r#"href="/page/4""#));
    }

    #[test]
    fn single_page_has_no_links() {
        let markup = render_page_links_maud(&PagingInfo::new(1, 4, 3)).into_string();
        assert!(markup.is_empty());
    }

    #[test]
    fn product_list_renders_names_in_order() {
        let markup = render_product_list_maud(&view_model(&[4, 5], PagingInfo::new(2, 3, 5)))
            .into_string();

        let p4 = markup.find("P4").unwrap();
        let p5 = markup.find("P5").unwrap();
        assert!(p4 < p5);
        assert!(markup.contains("19,50 zł"));
    }

    #[test]
    fn empty_page_shows_message() {
        let markup =
            render_product_list_maud(&view_model(&[], PagingInfo::new(9, 3, 5))).into_string();
        assert!(markup.contains("Brak produktów na tej stronie."));
    }
}
