//! Remote indexing service
//!
//! The collector talks to the index through the [`IndexService`] trait.
//! [`GraphqlIndex`] is the production implementation: it POSTs the Irys
//! `transactions` query and maps the edges into a [`Page`](crate::types::Page).

mod index;
mod types;

pub use index::{GraphqlIndex, IndexService, LIST_TRANSACTIONS_QUERY};
pub use types::{
    EdgeNode, GraphQlRequest, GraphQlResponse, ListVariables, TransactionEdge,
    TransactionsConnection, TransactionsData,
};
