//! # Cart Badge
//!
//! Projects the cart's total quantity onto any number of display surfaces.
//!
//! The original storefront wrote the count into every `[data-cart-count]`
//! element; here a surface is anything implementing [`BadgeSurface`], and
//! [`CartBadge`] fans one count out to all of them. Wired into the cart
//! store as an observer, it re-projects after every mutation; call
//! [`CartStore::refresh_badges`](crate::CartStore::refresh_badges) once at
//! startup for the view-load projection.

use tracing::debug;

use crate::cart_store::CartObserver;

/// A display surface that can receive the live cart-count text.
pub trait BadgeSurface {
    /// Writes the count text onto the surface.
    fn set_count_text(&self, text: &str);
}

/// Fans the cart count out to every registered surface.
#[derive(Default)]
pub struct CartBadge {
    surfaces: Vec<Box<dyn BadgeSurface>>,
}

impl CartBadge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers another surface; all surfaces receive every projection.
    pub fn register_surface(&mut self, surface: Box<dyn BadgeSurface>) {
        self.surfaces.push(surface);
    }

    /// Writes `total_quantity` as decimal text onto every surface.
    pub fn project(&self, total_quantity: u64) {
        debug!(total_quantity, surfaces = self.surfaces.len(), "badge projection");
        let text = total_quantity.to_string();
        for surface in &self.surfaces {
            surface.set_count_text(&text);
        }
    }
}

impl CartObserver for CartBadge {
    fn cart_changed(&self, total_quantity: u64) {
        self.project(total_quantity);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeSurface {
        text: Rc<RefCell<String>>,
    }

    impl BadgeSurface for FakeSurface {
        fn set_count_text(&self, text: &str) {
            *self.text.borrow_mut() = text.to_string();
        }
    }

    #[test]
    fn test_projects_onto_every_surface() {
        let first = Rc::new(RefCell::new(String::new()));
        let second = Rc::new(RefCell::new(String::new()));

        let mut badge = CartBadge::new();
        badge.register_surface(Box::new(FakeSurface {
            text: Rc::clone(&first),
        }));
        badge.register_surface(Box::new(FakeSurface {
            text: Rc::clone(&second),
        }));

        badge.project(7);
        assert_eq!(*first.borrow(), "7");
        assert_eq!(*second.borrow(), "7");

        badge.cart_changed(0);
        assert_eq!(*first.borrow(), "0");
        assert_eq!(*second.borrow(), "0");
    }
}
