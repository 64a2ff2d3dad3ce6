use contracts::collection::RecordSet;
use contracts::domain::broker::Broker;
use contracts::domain::owner::Owner;
use contracts::domain::property::Property;
use contracts::seed;
use leptos::prelude::*;

/// Authoritative in-memory collections for the session.
///
/// Seeded once at app start; the sole writer afterwards. Read views project
/// straight from the signals and re-render after each commit. Collections
/// are independent: deletes never cascade, and a property left pointing at
/// a removed broker/owner is resolved to "N/A" at display time.
#[derive(Clone, Copy)]
pub struct EstateStore {
    pub properties: RwSignal<RecordSet<Property>>,
    pub brokers: RwSignal<RecordSet<Broker>>,
    pub owners: RwSignal<RecordSet<Owner>>,
}

impl EstateStore {
    pub fn new() -> Self {
        Self {
            properties: RwSignal::new(RecordSet::from_seed(seed::properties())),
            brokers: RwSignal::new(RecordSet::from_seed(seed::brokers())),
            owners: RwSignal::new(RecordSet::from_seed(seed::owners())),
        }
    }

    pub fn save_property(&self, property: Property) {
        self.properties.update(|set| {
            let id = set.save(property);
            log::debug!("property saved: {id}");
        });
    }

    pub fn delete_property(&self, id: &str) {
        log::debug!("property deleted: {id}");
        let id = id.to_string();
        self.properties.update(|set| set.delete(&id));
    }

    pub fn save_broker(&self, broker: Broker) {
        self.brokers.update(|set| {
            let id = set.save(broker);
            log::debug!("broker saved: {id}");
        });
    }

    pub fn delete_broker(&self, id: &str) {
        log::debug!("broker deleted: {id}");
        let id = id.to_string();
        self.brokers.update(|set| set.delete(&id));
    }

    pub fn save_owner(&self, owner: Owner) {
        self.owners.update(|set| {
            let id = set.save(owner);
            log::debug!("owner saved: {id}");
        });
    }

    pub fn delete_owner(&self, id: &str) {
        log::debug!("owner deleted: {id}");
        let id = id.to_string();
        self.owners.update(|set| set.delete(&id));
    }

    pub fn property(&self, id: &str) -> Option<Property> {
        self.properties.with(|set| set.get(id).cloned())
    }

    pub fn broker(&self, id: &str) -> Option<Broker> {
        self.brokers.with(|set| set.get(id).cloned())
    }

    /// Soft-reference display name; `None` means the caller renders "N/A".
    pub fn broker_name(&self, id: &str) -> Option<String> {
        self.brokers.with(|set| set.get(id).map(|b| b.name.clone()))
    }

    pub fn owner_name(&self, id: &str) -> Option<String> {
        self.owners.with(|set| set.get(id).map(|o| o.name.clone()))
    }
}

impl Default for EstateStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the store installed by `App`.
pub fn use_estate_store() -> EstateStore {
    use_context::<EstateStore>().expect("EstateStore not found in component tree")
}
