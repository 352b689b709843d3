//! Handlers for the `/sweets` resource.
//!
//! Read endpoints are public; mutations require authentication, with
//! delete and restock restricted to administrators and update restricted
//! to the owner or an administrator.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use validator::Validate;

use sweetshop_core::category::{Category, CATEGORIES};
use sweetshop_core::error::CoreError;
use sweetshop_core::pagination::{clamp_page, clamp_page_size, offset, total_pages};
use sweetshop_core::roles::ROLE_ADMIN;
use sweetshop_core::types::DbId;
use sweetshop_core::validation::FieldError;
use sweetshop_db::models::sweet::{CreateSweet, SweetFilter, SweetResponse, UpdateSweet};
use sweetshop_db::repositories::{PurchaseOutcome, SweetRepo};

use crate::error::{collect_field_errors, AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::query::PageParams;
use crate::response::{
    CategoriesResponse, ListSweetsResponse, MessageResponse, Pagination, PurchaseResponse,
    RestockResponse, SearchSweetsResponse, SweetMutationResponse,
};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/sweets`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateSweetRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: String,
    /// Validated against the fixed category set (any case accepted).
    pub category: String,
    #[validate(range(min = 0.0, message = "Price must be a non-negative number"))]
    pub price: f64,
    #[validate(range(min = 0, message = "Quantity must be a non-negative integer"))]
    pub quantity: i64,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,
}

/// Request body for `PUT /api/sweets/{id}`. Absent fields are untouched.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSweetRequest {
    #[validate(length(min = 1, max = 100, message = "Name must be between 1 and 100 characters"))]
    pub name: Option<String>,
    pub category: Option<String>,
    #[validate(range(min = 0.0, message = "Price must be a non-negative number"))]
    pub price: Option<f64>,
    #[validate(range(min = 0, message = "Quantity must be a non-negative integer"))]
    pub quantity: Option<i64>,
    #[validate(length(max = 500, message = "Description must be at most 500 characters"))]
    pub description: Option<String>,
    #[validate(url(message = "Image must be a valid URL"))]
    pub image: Option<String>,
}

/// Request body for purchase and restock.
#[derive(Debug, Deserialize, Validate)]
pub struct StockRequest {
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i64,
}

/// Query parameters for `GET /api/sweets/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
    pub category: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<f64>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<f64>,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Parse a category field against the fixed set, accumulating a field
/// error on failure. Returns the canonical lowercase name.
fn check_category(value: &str, errors: &mut Vec<FieldError>) -> Option<&'static str> {
    match Category::parse(value) {
        Some(category) => Some(category.as_str()),
        None => {
            errors.push(FieldError {
                field: "category".to_string(),
                message: "Invalid category".to_string(),
            });
            None
        }
    }
}

/// Fail with `{"errors": [...]}` if any validation errors accumulated.
fn ensure_valid(errors: Vec<FieldError>) -> AppResult<()> {
    if errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation(errors))
    }
}

/// Load a sweet or fail with 404.
async fn ensure_sweet_exists(
    pool: &sqlx::PgPool,
    id: DbId,
) -> AppResult<sweetshop_db::models::sweet::SweetWithCreator> {
    SweetRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Sweet", id }))
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/sweets?page=&limit=
///
/// Public paginated listing, most recently created first.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = clamp_page(params.page);
    let limit = clamp_page_size(params.limit);

    let rows = SweetRepo::list(&state.pool, limit, offset(page, limit)).await?;
    let total = SweetRepo::count(&state.pool).await?;

    Ok(Json(ListSweetsResponse {
        sweets: rows.into_iter().map(SweetResponse::from).collect(),
        pagination: Pagination {
            current: page,
            pages: total_pages(total, limit),
            total,
        },
    }))
}

/// GET /api/sweets/search?q=&category=&minPrice=&maxPrice=
///
/// Public search. All present filters compose with AND; an absent filter
/// imposes no constraint.
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<impl IntoResponse> {
    let filter = SweetFilter {
        q: params.q,
        category: params.category.map(|c| c.trim().to_ascii_lowercase()),
        min_price: params.min_price,
        max_price: params.max_price,
    };

    let rows = SweetRepo::search(&state.pool, &filter).await?;
    let sweets: Vec<SweetResponse> = rows.into_iter().map(SweetResponse::from).collect();

    Ok(Json(SearchSweetsResponse {
        count: sweets.len(),
        sweets,
    }))
}

/// GET /api/sweets/categories/list
///
/// The fixed category set; static configuration, not derived from data.
pub async fn categories() -> Json<CategoriesResponse> {
    Json(CategoriesResponse {
        categories: CATEGORIES,
    })
}

/// GET /api/sweets/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let sweet = ensure_sweet_exists(&state.pool, id).await?;
    Ok(Json(SweetResponse::from(sweet)))
}

/// POST /api/sweets
///
/// Create a new sweet; the requester becomes the owner.
pub async fn create(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Json(input): Json<CreateSweetRequest>,
) -> AppResult<impl IntoResponse> {
    let mut errors = input.validate().map_or_else(|e| collect_field_errors(&e), |_| Vec::new());
    let category = check_category(&input.category, &mut errors);
    ensure_valid(errors)?;

    let created = SweetRepo::create(
        &state.pool,
        &CreateSweet {
            name: input.name,
            category: category.expect("validated above").to_string(),
            price: input.price,
            quantity: input.quantity,
            description: input.description,
            image: input.image,
            created_by: user.user_id,
        },
    )
    .await?;

    let sweet = ensure_sweet_exists(&state.pool, created.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(SweetMutationResponse {
            message: "Sweet added successfully".to_string(),
            sweet: SweetResponse::from(sweet),
        }),
    ))
}

/// PUT /api/sweets/{id}
///
/// Update any subset of mutable fields. Owner or admin only.
pub async fn update(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateSweetRequest>,
) -> AppResult<impl IntoResponse> {
    let mut errors = input.validate().map_or_else(|e| collect_field_errors(&e), |_| Vec::new());
    let category = match &input.category {
        Some(raw) => check_category(raw, &mut errors).map(str::to_string),
        None => None,
    };
    ensure_valid(errors)?;

    let existing = ensure_sweet_exists(&state.pool, id).await?;
    if user.role != ROLE_ADMIN && existing.created_by != user.user_id {
        return Err(AppError::Core(CoreError::Forbidden("Access denied".into())));
    }

    SweetRepo::update(
        &state.pool,
        id,
        &UpdateSweet {
            name: input.name,
            category,
            price: input.price,
            quantity: input.quantity,
            description: input.description,
            image: input.image,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound { entity: "Sweet", id }))?;

    let sweet = ensure_sweet_exists(&state.pool, id).await?;
    Ok(Json(SweetMutationResponse {
        message: "Sweet updated successfully".to_string(),
        sweet: SweetResponse::from(sweet),
    }))
}

/// DELETE /api/sweets/{id}
///
/// Admin only.
pub async fn delete(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = SweetRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: "Sweet deleted successfully".to_string(),
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Sweet", id }))
    }
}

/// POST /api/sweets/{id}/purchase
///
/// Decrement stock by the requested amount. The sufficiency check and
/// the decrement are a single conditional update in the repository, so
/// stock can never go negative under concurrent purchases.
pub async fn purchase(
    State(state): State<AppState>,
    RequireAuth(user): RequireAuth,
    Path(id): Path<DbId>,
    Json(input): Json<StockRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|e| AppError::validation(collect_field_errors(&e)))?;

    let outcome = SweetRepo::purchase(&state.pool, id, input.quantity).await?;
    let updated = match outcome {
        PurchaseOutcome::Purchased(sweet) => sweet,
        PurchaseOutcome::Insufficient { available } => {
            return Err(AppError::Core(CoreError::InsufficientStock { available }));
        }
        PurchaseOutcome::NotFound => {
            return Err(AppError::Core(CoreError::NotFound { entity: "Sweet", id }));
        }
    };

    tracing::info!(
        sweet_id = id,
        user_id = user.user_id,
        amount = input.quantity,
        remaining = updated.quantity,
        "purchase completed"
    );

    let sweet = ensure_sweet_exists(&state.pool, id).await?;
    Ok(Json(PurchaseResponse {
        message: format!("Successfully purchased {} {}(s)", input.quantity, updated.name),
        remaining_stock: updated.quantity,
        purchased_quantity: input.quantity,
        sweet: SweetResponse::from(sweet),
    }))
}

/// POST /api/sweets/{id}/restock
///
/// Increment stock by the requested amount. Admin only.
pub async fn restock(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<StockRequest>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(|e| AppError::validation(collect_field_errors(&e)))?;

    let updated = SweetRepo::restock(&state.pool, id, input.quantity)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Sweet", id }))?;

    tracing::info!(
        sweet_id = id,
        admin_id = admin.user_id,
        amount = input.quantity,
        new_stock = updated.quantity,
        "restock completed"
    );

    let sweet = ensure_sweet_exists(&state.pool, id).await?;
    Ok(Json(RestockResponse {
        message: format!("Successfully restocked {} {}(s)", input.quantity, updated.name),
        new_stock: updated.quantity,
        restocked_quantity: input.quantity,
        sweet: SweetResponse::from(sweet),
    }))
}
