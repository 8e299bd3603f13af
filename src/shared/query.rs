//! Table query builder for the backend's REST filter grammar.
//!
//! Produces relative endpoints such as
//! `deposit_requests?select=*&order=created_at.desc&status=eq.pending`.
//! Filter values are URL-encoded; column names and `select` lists are passed
//! through as given.

use std::fmt;

/// Sort direction for `order=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Asc,
    Desc,
}

/// A query against one backend table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    table: String,
    params: Vec<(String, String)>,
}

impl Query {
    pub fn table(table: &str) -> Self {
        Self {
            table: table.to_string(),
            params: Vec::new(),
        }
    }

    /// `select=<columns>`, one of `"*"`, `"count"`, or a comma-separated list.
    pub fn select(mut self, columns: &str) -> Self {
        self.params.push(("select".to_string(), columns.to_string()));
        self
    }

    /// `<column>=eq.<value>`
    pub fn eq(mut self, column: &str, value: impl fmt::Display) -> Self {
        self.params.push((
            column.to_string(),
            format!("eq.{}", urlencoding::encode(&value.to_string())),
        ));
        self
    }

    /// Adds `<column>=eq.<value>` only when a value is given.
    pub fn eq_opt(self, column: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.eq(column, v),
            None => self,
        }
    }

    pub fn order(mut self, column: &str, direction: Order) -> Self {
        let value = match direction {
            Order::Asc => column.to_string(),
            Order::Desc => format!("{}.desc", column),
        };
        self.params.push(("order".to_string(), value));
        self
    }

    pub fn newest_first(self) -> Self {
        self.order("created_at", Order::Desc)
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.params.push(("limit".to_string(), limit.to_string()));
        self
    }

    pub fn offset(mut self, offset: u32) -> Self {
        self.params.push(("offset".to_string(), offset.to_string()));
        self
    }

    /// Relative endpoint for the gateway.
    pub fn to_endpoint(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.table)?;
        for (i, (key, value)) in self.params.iter().enumerate() {
            let sep = if i == 0 { '?' } else { '&' };
            write!(f, "{}{}={}", sep, key, value)?;
        }
        Ok(())
    }
}
