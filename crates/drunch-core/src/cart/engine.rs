//! In-memory cart state and quantity arithmetic.
//!
//! The cart is an insertion-ordered collection of lines keyed by catalog
//! item id (no duplicate ids). Derived totals are pure functions recomputed
//! on every read, never cached. The snapshot form is a JSON array of lines;
//! snapshot and in-memory form are loss-lessly interchangeable.

use drunch_types::cart::CartLine;
use drunch_types::catalog::MenuItem;
use rust_decimal::Decimal;
use tracing::warn;
use uuid::Uuid;

/// Ordered collection of cart lines, keyed by catalog item id.
///
/// Invariants:
/// - No two lines share an id; re-adding an item increments its line.
/// - No line has quantity 0; reductions to <= 0 remove the line.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// An empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// The lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Consume the cart, yielding its lines in insertion order.
    pub fn into_lines(self) -> Vec<CartLine> {
        self.lines
    }

    /// Add one unit of a catalog item.
    ///
    /// If a line with the same id exists its quantity increments by exactly
    /// 1; otherwise a new line is appended at the end with quantity 1.
    /// Always succeeds.
    pub fn add_item(&mut self, item: &MenuItem) {
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == item.id) {
            line.quantity += 1;
        } else {
            self.lines.push(CartLine::from_item(item));
        }
    }

    /// Replace the quantity of an existing line.
    ///
    /// A quantity <= 0 removes the line, same as [`Cart::remove_item`].
    /// Unknown ids are a no-op.
    pub fn set_quantity(&mut self, id: &Uuid, quantity: i64) {
        if quantity <= 0 {
            self.remove_item(id);
            return;
        }
        // Quantities come from +/- steppers; i64 -> u32 cannot overflow here
        // for any realistic order, but saturate rather than wrap.
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == *id) {
            line.quantity = quantity;
        }
    }

    /// Remove the line with the given id, if present.
    pub fn remove_item(&mut self, id: &Uuid) {
        self.lines.retain(|l| l.id != *id);
    }

    /// Empty the cart. Idempotent.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of all line quantities (the badge count).
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of price x quantity over all lines.
    pub fn total_price(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Serialize to the persisted snapshot form: a JSON array of lines.
    pub fn to_snapshot(&self) -> serde_json::Value {
        serde_json::to_value(&self.lines).unwrap_or_else(|e| {
            warn!(error = %e, "cart snapshot serialization failed");
            serde_json::Value::Array(Vec::new())
        })
    }

    /// Rehydrate from a persisted snapshot.
    ///
    /// An absent or malformed snapshot yields an empty cart -- corrupt
    /// persisted state must never crash or surface to the user.
    pub fn from_snapshot(snapshot: Option<&serde_json::Value>) -> Self {
        let Some(value) = snapshot else {
            return Self::new();
        };
        match serde_json::from_value::<Vec<CartLine>>(value.clone()) {
            Ok(lines) => Self { lines },
            Err(e) => {
                warn!(error = %e, "discarding malformed cart snapshot");
                Self::new()
            }
        }
    }
}
