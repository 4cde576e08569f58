use crate::core::snapshot::Collection;
use crate::domain::model::{Customer, CustomerUpdate};
use crate::domain::ports::Storage;
use crate::utils::error::{BookingError, Entity, Result};

const CUSTOMERS_DOCUMENT: &str = "customers.json";

pub struct CustomerStore<S> {
    collection: Collection<S, Customer>,
}

impl<S: Storage> CustomerStore<S> {
    pub fn new(storage: S) -> Self {
        Self {
            collection: Collection::new(storage, CUSTOMERS_DOCUMENT),
        }
    }

    pub fn create(&self, customer_id: &str, name: &str, email: &str, phone: &str) -> Result<Customer> {
        let mut customers = self.collection.load();
        if customers.contains_key(customer_id) {
            return Err(BookingError::Duplicate {
                entity: Entity::Customer,
                id: customer_id.to_string(),
            });
        }

        let customer = Customer::new(customer_id, name, email, phone);
        customers.insert(customer.customer_id.clone(), customer.clone());
        self.collection.save(&customers);
        tracing::info!("customer {} created", customer.customer_id);
        Ok(customer)
    }

    pub fn delete(&self, customer_id: &str) -> Result<()> {
        let mut customers = self.collection.load();
        if customers.remove(customer_id).is_none() {
            return Err(Self::not_found(customer_id));
        }

        self.collection.save(&customers);
        tracing::info!("customer {} deleted", customer_id);
        Ok(())
    }

    pub fn get(&self, customer_id: &str) -> Result<Customer> {
        self.collection
            .load()
            .remove(customer_id)
            .ok_or_else(|| Self::not_found(customer_id))
    }

    /// Applies the fields present in `update`; `None` fields are left
    /// untouched, `Some` fields are overwritten even when empty.
    pub fn update(&self, customer_id: &str, update: CustomerUpdate) -> Result<Customer> {
        let mut customers = self.collection.load();
        let customer = customers
            .get_mut(customer_id)
            .ok_or_else(|| Self::not_found(customer_id))?;

        if let Some(name) = update.name {
            customer.name = name;
        }
        if let Some(email) = update.email {
            customer.email = email;
        }
        if let Some(phone) = update.phone {
            customer.phone = phone;
        }

        let updated = customer.clone();
        self.collection.save(&customers);
        tracing::info!("customer {} updated", customer_id);
        Ok(updated)
    }

    fn not_found(customer_id: &str) -> BookingError {
        BookingError::NotFound {
            entity: Entity::Customer,
            id: customer_id.to_string(),
        }
    }
}
