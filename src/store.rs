//! Admin Page State Store
//!
//! Single owner of all view state, using Leptos reactive_stores for
//! field-level reactivity. Inputs bind straight to their buffer fields; every
//! other change goes through a `store_*` helper or an `InFlight` method.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::drawing_no::drawing_no_from_filename;
use crate::models::{Customer, Drawing, PdfFile};

/// Sidebar entries
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Menu {
    #[default]
    Dashboard,
    Customers,
    Drawings,
    Search,
}

impl Menu {
    pub const ALL: [Menu; 4] = [Menu::Dashboard, Menu::Customers, Menu::Drawings, Menu::Search];

    pub fn label(self) -> &'static str {
        match self {
            Menu::Dashboard => "Dashboard",
            Menu::Customers => "Customers",
            Menu::Drawings => "Drawings",
            Menu::Search => "Search",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Menu::Dashboard => "🏠",
            Menu::Customers => "👥",
            Menu::Drawings => "📁",
            Menu::Search => "🔍",
        }
    }

    /// Whether the page section owned by `section` is visible under this menu.
    /// Dashboard shows everything.
    pub fn shows(self, section: Menu) -> bool {
        self == Menu::Dashboard || self == section
    }
}

/// User-triggered network operations
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    AddCustomer,
    UploadDrawing,
}

/// At most one request in flight per operation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InFlight {
    adding_customer: bool,
    uploading_drawing: bool,
}

impl InFlight {
    fn slot(&mut self, op: Operation) -> &mut bool {
        match op {
            Operation::AddCustomer => &mut self.adding_customer,
            Operation::UploadDrawing => &mut self.uploading_drawing,
        }
    }

    pub fn is_running(&self, op: Operation) -> bool {
        match op {
            Operation::AddCustomer => self.adding_customer,
            Operation::UploadDrawing => self.uploading_drawing,
        }
    }

    /// Claim `op`; false if it is already running
    pub fn try_begin(&mut self, op: Operation) -> bool {
        let slot = self.slot(op);
        if *slot {
            return false;
        }
        *slot = true;
        true
    }

    pub fn finish(&mut self, op: Operation) {
        *self.slot(op) = false;
    }
}

/// All view state of the admin page
#[derive(Clone, Debug, Default, Store)]
pub struct AdminState {
    /// Customer name input buffer
    pub customer_name: String,
    pub customers: Vec<Customer>,
    pub active_menu: Menu,
    /// Customer picked in the upload form (display only)
    pub selected_customer: Option<String>,
    /// Read-only drawing number field, derived from the selected file
    pub drawing_no: String,
    pub selected_file: Option<PdfFile>,
    /// Most recent first
    pub drawings: Vec<Drawing>,
    pub search_term: String,
    pub in_flight: InFlight,
}

impl AdminState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AdminStore = Store<AdminState>;

/// Get the admin store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_customers_loaded(store: &AdminStore, customers: Vec<Customer>) {
    store.customers().set(customers);
}

pub fn store_drawings_loaded(store: &AdminStore, drawings: Vec<Drawing>) {
    store.drawings().set(drawings);
}

/// Append the created record and clear the name input
pub fn store_customer_added(store: &AdminStore, customer: Customer) {
    store.customers().write().push(customer);
    store.customer_name().write().clear();
}

/// Remember the picked PDF and default the drawing number from its name
pub fn store_file_selected(store: &AdminStore, file: PdfFile) {
    store.drawing_no().set(drawing_no_from_filename(&file.name).to_string());
    store.selected_file().set(Some(file));
}

/// Put the created record on top and reset the upload form
pub fn store_drawing_uploaded(store: &AdminStore, drawing: Drawing) {
    store.drawings().write().insert(0, drawing);
    store.selected_file().set(None);
    store.drawing_no().write().clear();
}

pub fn store_select_menu(store: &AdminStore, menu: Menu) {
    store.active_menu().set(menu);
}

pub fn store_clear_search(store: &AdminStore) {
    store.search_term().write().clear();
}
