//! Customer Commands
//!
//! Bindings for `/customers`.

use crate::models::{Customer, NewCustomer};
use super::{ApiError, HttpApi};

const CUSTOMERS: &str = "customers";

pub async fn list_customers(api: &HttpApi) -> Result<Vec<Customer>, ApiError> {
    api.fetch_json(api.get(CUSTOMERS)).await
}

pub async fn create_customer(api: &HttpApi, name: &str) -> Result<Customer, ApiError> {
    api.fetch_json(api.post(CUSTOMERS).json(&NewCustomer { name })).await
}
