//! UI-facing cart handle.

use std::sync::Arc;

use rocket_commerce::{Cart, CartError, ProductId};
use tokio::sync::watch;

use crate::notify::{user_message, NotificationSink, Operation};
use crate::store::{CartStore, UpdateProductAmount};

/// Cart access for presentation code.
///
/// Mutations never return an error. Failures are logged and a user-facing
/// message goes to the sink; the published cart stays as it was.
#[derive(Clone)]
pub struct CartHandle {
    store: Arc<CartStore>,
    sink: Arc<dyn NotificationSink>,
}

impl CartHandle {
    pub fn new(store: Arc<CartStore>, sink: Arc<dyn NotificationSink>) -> Self {
        Self { store, sink }
    }

    pub fn cart(&self) -> Cart {
        self.store.cart()
    }

    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.store.subscribe()
    }

    pub fn store(&self) -> &CartStore {
        &self.store
    }

    pub async fn add_product(&self, product_id: ProductId) {
        let result = self.store.add_product(product_id).await;
        self.report(Operation::Add, product_id, result);
    }

    pub fn remove_product(&self, product_id: ProductId) {
        let result = self.store.remove_product(product_id);
        self.report(Operation::Remove, product_id, result);
    }

    pub async fn update_product_amount(&self, request: UpdateProductAmount) {
        let result = self.store.update_product_amount(request).await;
        self.report(Operation::Update, request.product_id, result);
    }

    fn report(&self, op: Operation, product_id: ProductId, result: Result<Cart, CartError>) {
        if let Err(e) = result {
            tracing::warn!(operation = %op, %product_id, error = %e, "cart operation failed");
            self.sink.notify_error(user_message(op, &e));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::CartRepository;
    use crate::testing::{FakeInventory, RecordingSink};
    use rocket_cache::{Cache, MemoryStore};

    fn handle(inventory: FakeInventory) -> (CartHandle, Arc<RecordingSink>) {
        let repository = CartRepository::new(Cache::new(MemoryStore::new()));
        let store = CartStore::open(Arc::new(inventory), repository).unwrap();
        let sink = Arc::new(RecordingSink::default());
        (CartHandle::new(Arc::new(store), sink.clone()), sink)
    }

    #[tokio::test]
    async fn test_success_is_silent() {
        let (cart, sink) = handle(FakeInventory::new().with_stock(1, 2));

        cart.add_product(ProductId::new(1)).await;
        cart.update_product_amount(UpdateProductAmount {
            product_id: ProductId::new(1),
            amount: 2,
        })
        .await;

        assert_eq!(cart.cart().amount_of(ProductId::new(1)), 2);
        assert!(sink.messages().is_empty());
    }

    #[tokio::test]
    async fn test_stock_failure_message() {
        let (cart, sink) = handle(FakeInventory::new().with_stock(1, 1));

        cart.add_product(ProductId::new(1)).await;
        cart.add_product(ProductId::new(1)).await;

        assert_eq!(sink.messages(), vec!["Quantidade solicitada fora de estoque"]);
        assert_eq!(cart.cart().amount_of(ProductId::new(1)), 1);
    }

    #[tokio::test]
    async fn test_generic_failure_messages() {
        let (cart, sink) = handle(FakeInventory::new().offline(9));

        cart.add_product(ProductId::new(9)).await;
        cart.remove_product(ProductId::new(9));
        cart.update_product_amount(UpdateProductAmount {
            product_id: ProductId::new(9),
            amount: 1,
        })
        .await;

        assert_eq!(
            sink.messages(),
            vec![
                "Erro na adição do produto",
                "Erro na remoção do produto",
                "Erro na alteração de quantidade do produto",
            ]
        );
        assert!(cart.cart().is_empty());
    }

    #[tokio::test]
    async fn test_ignored_update_notifies_nothing() {
        let (cart, sink) = handle(FakeInventory::new());

        cart.update_product_amount(UpdateProductAmount {
            product_id: ProductId::new(1),
            amount: 0,
        })
        .await;

        assert!(sink.messages().is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let (cart, _sink) = handle(FakeInventory::new().with_stock(1, 5));
        let other = cart.clone();
        let rx = other.subscribe();

        cart.add_product(ProductId::new(1)).await;

        assert!(rx.has_changed().unwrap());
        assert_eq!(other.cart(), cart.cart());
    }
}
