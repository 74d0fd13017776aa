use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::browse::query::BrowseQuery;
use crate::browse::view_model::RecipeCard;
use crate::gateway::models::RecipePageDto;
use crate::gateway::GatewayClient;
use crate::Result;

/// One successfully loaded page of recipes
#[derive(Debug, Clone)]
pub struct RecipePage {
    pub recipes: Vec<RecipeCard>,
    pub total_pages: usize,
    /// 1-based page the load was issued for
    pub page: usize,
}

/// Retained browse state: the last committed page plus the loading flag
#[derive(Debug, Clone, Default)]
pub struct BrowseState {
    pub recipes: Vec<RecipeCard>,
    pub total_pages: usize,
    pub loading: bool,
}

/// Ticket identifying one in-flight load
struct LoadTicket(u64);

/// Fetch orchestrator for the browse page.
///
/// `load_page` issues exactly one gateway request per call and returns that
/// call's own outcome. Retained state is only overwritten by the newest
/// load: each load takes a ticket from a monotonically increasing
/// generation counter, and a response whose ticket is no longer current is
/// returned to its caller but never committed. A failed load leaves the
/// retained records and total-page count untouched.
pub struct BrowseController {
    gateway: Arc<GatewayClient>,
    page_size: usize,
    generation: AtomicU64,
    state: Mutex<BrowseState>,
}

impl BrowseController {
    pub fn new(gateway: Arc<GatewayClient>, page_size: usize) -> Self {
        Self {
            gateway,
            page_size,
            generation: AtomicU64::new(0),
            state: Mutex::new(BrowseState::default()),
        }
    }

    /// Load one page of recipes.
    ///
    /// The 1-based UI page is translated to the gateway's zero-based index
    /// here. Pages beyond the last one are sent as-is; the gateway's answer
    /// is trusted.
    pub async fn load_page(&self, query: &BrowseQuery) -> Result<RecipePage> {
        let ticket = self.begin_load();
        let outcome = self
            .gateway
            .list_recipes(query.zero_based_page(), self.page_size, query.search_term())
            .await;
        self.finish_load(ticket, query.page, outcome)
    }

    /// A copy of the retained state
    pub fn snapshot(&self) -> BrowseState {
        self.state.lock().expect("browse state lock poisoned").clone()
    }

    fn begin_load(&self) -> LoadTicket {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.state
            .lock()
            .expect("browse state lock poisoned")
            .loading = true;
        LoadTicket(generation)
    }

    fn finish_load(
        &self,
        ticket: LoadTicket,
        page: usize,
        outcome: Result<RecipePageDto>,
    ) -> Result<RecipePage> {
        // A ticket is current while no newer load has begun. Only the
        // current load owns the loading flag and the retained state.
        let current = ticket.0 == self.generation.load(Ordering::SeqCst);
        let mut state = self.state.lock().expect("browse state lock poisoned");

        if current {
            state.loading = false;
        }

        match outcome {
            Ok(dto) => {
                let recipes: Vec<RecipeCard> =
                    dto.content.into_iter().map(RecipeCard::from_dto).collect();

                if current {
                    state.recipes = recipes.clone();
                    state.total_pages = dto.total_pages;
                }

                Ok(RecipePage {
                    recipes,
                    total_pages: dto.total_pages,
                    page,
                })
            }
            Err(e) => Err(e),
        }
    }
}
