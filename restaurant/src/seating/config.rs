//! Floor plan configuration.

use serde::{Deserialize, Serialize};

use super::{
    errors::{SeatingError, SeatingResult},
    models::{MAX_TABLE_SIZE, MIN_TABLE_SIZE, Table},
};

/// Layout of a dining room: the size of each table, in seating-priority
/// order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FloorPlan {
    /// Room name, used in logs
    pub name: String,

    /// Chairs per table. Groups are offered tables in this order.
    pub table_sizes: Vec<usize>,
}

impl Default for FloorPlan {
    fn default() -> Self {
        Self {
            name: "Main Room".to_string(),
            table_sizes: vec![2, 2, 4, 4, 6],
        }
    }
}

impl FloorPlan {
    pub fn new(name: impl Into<String>, table_sizes: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            table_sizes,
        }
    }

    /// Parse a floor plan from JSON and validate it.
    ///
    /// ```
    /// use restaurant::seating::FloorPlan;
    ///
    /// let plan = FloorPlan::from_json(r#"{"name":"Patio","table_sizes":[2,4]}"#).unwrap();
    /// assert_eq!(plan.total_seats(), 6);
    /// ```
    pub fn from_json(json: &str) -> SeatingResult<Self> {
        let plan: FloorPlan = serde_json::from_str(json)?;
        plan.validate()?;
        Ok(plan)
    }

    /// Validate configuration
    pub fn validate(&self) -> SeatingResult<()> {
        if self.table_sizes.is_empty() {
            return Err(SeatingError::NoTables);
        }

        if let Some(&size) = self
            .table_sizes
            .iter()
            .find(|size| !(MIN_TABLE_SIZE..=MAX_TABLE_SIZE).contains(size))
        {
            return Err(SeatingError::InvalidTableSize(size));
        }

        Ok(())
    }

    /// Build the empty tables described by this plan.
    pub fn build_tables(&self) -> SeatingResult<Vec<Table>> {
        self.validate()?;
        self.table_sizes.iter().map(|&size| Table::new(size)).collect()
    }

    pub fn total_seats(&self) -> usize {
        self.table_sizes.iter().sum()
    }
}
