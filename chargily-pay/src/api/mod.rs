//! One method per API operation, grouped by resource

mod balance;
mod checkouts;
mod customers;
mod payment_links;
mod prices;
mod products;
