//! Client facade: one object a front-end talks to.
//!
//! Owns the API client, the state containers and on-device persistence,
//! and keeps them in step (token on the client follows the session store,
//! logout clears persisted credentials and the cart, and so on).

use std::sync::Arc;

use thiserror::Error;

use crate::api::{ApiClient, ApiError};
use crate::config::{Config, ConfigStore};
use crate::format::{normalize_phone, FormatError};
use crate::geocoding::{Geocoder, GeocodingError};
use crate::model::{Dish, Order, Payment, PaymentMethod, PaymentStatus};
use crate::search::{search, SearchQuery};
use crate::state::cart::{CartIntent, CartItem};
use crate::state::order_flow::OrderFlowIntent;
use crate::state::payment::PaymentIntent;
use crate::state::session::{AuthSession, SessionIntent};
use crate::state::{AppState, OrderBuildError};
use crate::storage::{FileStore, KeyValueStore, SearchHistory, SessionRepository, StorageError};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Geocoding(#[from] GeocodingError),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Order(#[from] OrderBuildError),

    #[error("Sign in first")]
    NotSignedIn,

    #[error("Dish '{0}' is not on the menu")]
    UnknownDish(String),

    #[error("Dish '{0}' is currently unavailable")]
    DishUnavailable(String),
}

pub struct App {
    config: ConfigStore,
    api: ApiClient,
    geocoder: Geocoder,
    state: AppState,
    sessions: SessionRepository,
    history: SearchHistory,
}

impl App {
    /// Build a client persisting to the configured data directory and
    /// restore the saved session, if any.
    pub fn bootstrap(config: ConfigStore) -> Result<Self, AppError> {
        let dir = config.get().storage.resolved_dir();
        let store: Arc<dyn KeyValueStore> = Arc::new(FileStore::open(dir)?);
        Self::with_store(config, store)
    }

    pub fn with_store(config: ConfigStore, store: Arc<dyn KeyValueStore>) -> Result<Self, AppError> {
        let snapshot: Config = config.get();
        let app = Self {
            api: ApiClient::new(&snapshot)?,
            geocoder: Geocoder::new(&snapshot)?,
            state: AppState::new(),
            sessions: SessionRepository::new(Arc::clone(&store)),
            history: SearchHistory::new(store),
            config,
        };

        match app.sessions.load() {
            Ok(Some(session)) => app.adopt_session(SessionIntent::Restore(session)),
            Ok(None) => {}
            Err(e) => tracing::warn!(error = %e, "Ignoring unreadable stored session"),
        }
        Ok(app)
    }

    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn search_history(&self) -> &SearchHistory {
        &self.history
    }

    fn adopt_session(&self, intent: SessionIntent) {
        let token = match &intent {
            SessionIntent::Authenticated(s) | SessionIntent::Restore(s) => Some(s.token.clone()),
            _ => None,
        };
        self.state.session.dispatch(intent);
        if self.state.session.with(|s| s.is_authenticated()) {
            self.api.set_token(token);
        }
    }

    /// The signed-in session, or [`AppError::NotSignedIn`].
    pub fn require_session(&self) -> Result<AuthSession, AppError> {
        self.state.session().ok_or(AppError::NotSignedIn)
    }

    pub fn last_phone(&self) -> Result<Option<String>, AppError> {
        Ok(self.sessions.last_phone()?)
    }

    pub async fn request_otp(&self, phone: &str) -> Result<String, AppError> {
        let phone = normalize_phone(phone)?;
        self.api.request_otp(&phone).await?;
        self.state.session.dispatch(SessionIntent::OtpRequested {
            phone: phone.clone(),
        });
        Ok(phone)
    }

    pub async fn verify_otp(&self, phone: &str, code: &str) -> Result<AuthSession, AppError> {
        let phone = normalize_phone(phone)?;
        let response = self.api.verify_otp(&phone, code.trim()).await?;
        tracing::info!(name = %response.user.display_name(), "Customer signed in");
        let session = AuthSession {
            token: response.access_token,
            phone,
            user_id: response.user.id,
        };
        self.sessions.save(&session)?;
        self.adopt_session(SessionIntent::Authenticated(session.clone()));
        Ok(session)
    }

    /// Sign out locally even when the backend cannot be reached.
    pub async fn logout(&self) -> Result<(), AppError> {
        if self.api.has_token() {
            if let Err(e) = self.api.logout().await {
                tracing::warn!(error = %e, "Backend logout failed, clearing local session anyway");
            }
        }
        self.sessions.clear()?;
        self.state.logout();
        Ok(())
    }

    /// Search the menu and remember the query.
    pub async fn search_dishes(&self, query: &SearchQuery) -> Result<Vec<Dish>, AppError> {
        let menu = self.api.get_all_menus().await?;
        let results: Vec<Dish> = search(&menu, query).into_iter().cloned().collect();
        if let Err(e) = self.history.record(&query.text) {
            tracing::warn!(error = %e, "Failed to record search history");
        }
        Ok(results)
    }

    /// Put `quantity` of `dish_id` in the cart with the given supplements.
    pub async fn add_to_cart(
        &self,
        dish_id: &str,
        quantity: u32,
        supplement_ids: &[String],
    ) -> Result<CartItem, AppError> {
        let menu = self.api.get_all_menus().await?;
        let dish = menu
            .iter()
            .find(|d| d.id == dish_id)
            .ok_or_else(|| AppError::UnknownDish(dish_id.to_string()))?;
        if !dish.available {
            return Err(AppError::DishUnavailable(dish.name.clone()));
        }
        let item = CartItem::from_dish(dish, quantity, supplement_ids);
        self.state.cart.dispatch(CartIntent::Add(item.clone()));
        Ok(item)
    }

    /// Place the current cart as an order and start its payment.
    ///
    /// Cash orders complete immediately; other methods stay pending until
    /// the provider confirms.
    pub async fn checkout(&self, method: PaymentMethod) -> Result<(Order, Payment), AppError> {
        self.require_session()?;
        let request = self.state.build_order(method)?;
        let order = self.api.place_order(&request).await?;

        self.state.payment.dispatch(PaymentIntent::Start {
            order_id: order.id.clone(),
            method,
        });

        let payment = match self.api.pay_order(&order.id, method).await {
            Ok(payment) => payment,
            Err(e) => {
                self.state.payment.dispatch(PaymentIntent::Failed {
                    order_id: order.id.clone(),
                    reason: e.user_message(),
                });
                return Err(e.into());
            }
        };

        match (payment.status, &payment.redirect_url) {
            (PaymentStatus::Succeeded, _) => self.state.complete_order(&order.id),
            (PaymentStatus::Failed, _) => {
                self.state.payment.dispatch(PaymentIntent::Failed {
                    order_id: order.id.clone(),
                    reason: "Paiement refusé".to_string(),
                });
            }
            (PaymentStatus::Pending, Some(url)) => {
                self.state.payment.dispatch(PaymentIntent::RedirectReceived {
                    order_id: order.id.clone(),
                    url: url.clone(),
                });
                // The cart is no longer needed once the order exists.
                self.state.cart.dispatch(CartIntent::Clear);
            }
            (PaymentStatus::Pending, None) => {
                if method == PaymentMethod::Cash {
                    self.state.complete_order(&order.id);
                } else {
                    self.state.cart.dispatch(CartIntent::Clear);
                }
            }
        }

        Ok((order, payment))
    }

    /// Locate the customer and store the result in the order flow.
    pub async fn locate(&self, latitude: f64, longitude: f64) -> Result<(), AppError> {
        let location = self.geocoder.reverse(latitude, longitude).await?;
        self.state
            .order_flow
            .dispatch(OrderFlowIntent::SetLocation(location));
        Ok(())
    }
}
