// src/services.rs

use crate::errors::AppError;
use crate::models::ProductsListViewModel;
use crate::pagination::{PagingInfo, paginate};
use crate::state::AppState;

/// Buduje jedną stronę listy produktów.
///
/// 1. Pobiera cały katalog z repozytorium (bez paginacji po stronie źródła).
/// 2. Sortuje rosnąco po `id`.
/// 3. Wycina stronę `page` o rozmiarze `products_per_page`.
///
/// Strona spoza zakresu zwraca pustą listę, a `total_items` zawsze liczy cały katalog.
pub async fn list_products(
    app_state: &AppState,
    page: i64,
) -> Result<ProductsListViewModel, AppError> {
    let page_size = app_state.products_per_page;

    let mut all_products = app_state.repository.products().await?;
    all_products.sort_by_key(|product| product.id);

    let total_items = i64::try_from(all_products.len()).map_err(|_| {
        AppError::InternalServerError("Zbyt wiele produktów do paginacji".to_string())
    })?;
    let products = paginate(all_products, page, page_size);

    tracing::debug!(
        "Strona {} ({} na stronę): {} z {} produktów",
        page,
        page_size,
        products.len(),
        total_items
    );

    Ok(ProductsListViewModel {
        products,
        paging_info: PagingInfo::new(page, page_size, total_items),
    })
}
