use crate::config::HandlerConfig;
use crate::ports::inbound::{ODataContext, ODataReadHandler};
use crate::ports::outbound::{EntityReader, InboundDeliveryItemEnricher, LocationResolver};
use crate::purchase_order_item::domain::purchase_order_item::PURCHASE_ORDER_ITEM_ENTITY;
use crate::purchase_order_item::domain::{
    EntityMap, Event, ODataResultList, ProcessEventDirectory, PurchaseOrderItem,
};
use crate::purchase_order_item::policies::CompletionValuePolicy;
use crate::purchase_order_item::services::{
    ExpandRequest, FilterBuilder, IdentifierNormalizer, QueryRewriter, PROCESS_ID_FILTER_PART,
};
use crate::shared::error::PofError;
use crate::shared::Result;
use async_trait::async_trait;
use futures::stream::{self, StreamExt, TryStreamExt};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info};
use uuid::Uuid;

const PROCESS_EVENT_DIRECTORY_ENTITY: &str = "ProcessEventDirectory";

/// Events of each tracked process, keyed by process id
type EventsByProcess = HashMap<Uuid, Vec<Event>>;

/// ReadPurchaseOrderItemsUseCase - Read handler for purchase order items
///
/// Rewrites the incoming request so the backend can serve it, reads the
/// items, then enriches them: locations and arrival times when the caller
/// expanded them, zeroed values for deleted items, and unpadded identifiers.
///
/// # Type Parameters
/// * `ER` - EntityReader implementation (backend client)
/// * `LR` - LocationResolver implementation
/// * `DE` - InboundDeliveryItemEnricher implementation
pub struct ReadPurchaseOrderItemsUseCase<ER, LR, DE> {
    entity_reader: ER,
    location_resolver: LR,
    delivery_item_enricher: DE,
    config: HandlerConfig,
}

impl<ER, LR, DE> ReadPurchaseOrderItemsUseCase<ER, LR, DE>
where
    ER: EntityReader,
    LR: LocationResolver,
    DE: InboundDeliveryItemEnricher,
{
    /// Creates a new use case with injected collaborators and default config
    pub fn new(entity_reader: ER, location_resolver: LR, delivery_item_enricher: DE) -> Self {
        Self {
            entity_reader,
            location_resolver,
            delivery_item_enricher,
            config: HandlerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: HandlerConfig) -> Self {
        self.config = config;
        self
    }

    /// Zeroes the values of every item whose latest event is a deletion.
    ///
    /// Directory lookups are split into chunks of process ids and issued
    /// concurrently, at most `max_parallel_lookups` at a time. Items read
    /// without their id are left unchanged.
    pub async fn update_completion_values(&self, items: &mut [PurchaseOrderItem]) -> Result<()> {
        let ids: Vec<Uuid> = items.iter().filter_map(|item| item.id).collect();
        if ids.is_empty() {
            debug!(items = items.len(), "No item ids selected, skipping event directory");
            return Ok(());
        }
        let events_by_process = self.fetch_events_by_process(&ids).await?;

        let mut zeroed = 0;
        for item in items.iter_mut() {
            let events = item
                .id
                .and_then(|id| events_by_process.get(&id))
                .map(Vec::as_slice)
                .unwrap_or_default();
            if CompletionValuePolicy::apply(item, events) {
                zeroed += 1;
            }
        }

        info!(items = items.len(), zeroed, "Updated completion values");
        Ok(())
    }

    /// Zeroes the item's values when its latest event is a deletion.
    pub async fn update_completion_value(&self, item: &mut PurchaseOrderItem) -> Result<()> {
        let Some(id) = item.id else {
            return Ok(());
        };
        let filter = PROCESS_ID_FILTER_PART.replacen("{}", &id.to_string(), 1);
        let uri = FilterBuilder::event_directory_uri(&self.config.model_namespace, &filter);

        let page = self.entity_reader.read_entity_set_all(&uri).await?;
        let events = page
            .results
            .into_iter()
            .map(|raw| decode_entity::<ProcessEventDirectory>(raw, PROCESS_EVENT_DIRECTORY_ENTITY))
            .filter_map(|entry| entry.map(|entry| entry.event).transpose())
            .collect::<Result<Vec<Event>>>()?;

        if CompletionValuePolicy::apply(item, &events) {
            info!(%id, "Purchase order item is deleted, values zeroed");
        }
        Ok(())
    }

    async fn fetch_events_by_process(&self, ids: &[Uuid]) -> Result<EventsByProcess> {
        let uris: Vec<String> = self
            .config
            .filter_builder()
            .split_large_filter(PROCESS_ID_FILTER_PART, "or", ids)
            .iter()
            .map(|filter| FilterBuilder::event_directory_uri(&self.config.model_namespace, filter))
            .collect();

        debug!(
            processes = ids.len(),
            lookups = uris.len(),
            "Fetching event directory"
        );

        let pages: Vec<ODataResultList<Value>> = stream::iter(uris)
            .map(|uri| async move { self.entity_reader.read_entity_set_all(&uri).await })
            .buffer_unordered(self.config.max_parallel_lookups.max(1))
            .try_collect()
            .await?;

        let mut events_by_process = EventsByProcess::new();
        for raw in pages.into_iter().flat_map(|page| page.results) {
            let entry: ProcessEventDirectory =
                decode_entity(raw, PROCESS_EVENT_DIRECTORY_ENTITY)?;
            if let Some(event) = entry.event {
                events_by_process
                    .entry(entry.process_id)
                    .or_default()
                    .push(event);
            }
        }

        Ok(events_by_process)
    }

    /// Attaches locations to all items and their delivery items in one batch
    async fn set_locations(&self, items: &mut [PurchaseOrderItem]) -> Result<()> {
        let locations = self
            .location_resolver
            .locations_for_purchase_order_items(items)
            .await?;

        for item in items.iter_mut() {
            self.location_resolver
                .set_locations_for_purchase_order_item(item, &locations);
            for delivery_item in item.inbound_delivery_items_mut() {
                self.location_resolver
                    .set_locations_for_inbound_delivery_item(delivery_item, &locations);
            }
        }
        Ok(())
    }

    /// Enriches the delivery items nested under a single item
    async fn process_expands(
        &self,
        item: &mut PurchaseOrderItem,
        expands: ExpandRequest,
    ) -> Result<()> {
        let delivery_items = item.inbound_delivery_items_mut();
        if delivery_items.is_empty() {
            return Ok(());
        }

        let locations = if expands.wants_locations {
            Some(
                self.location_resolver
                    .locations_for_inbound_delivery_items(delivery_items)
                    .await?,
            )
        } else {
            None
        };

        if expands.wants_arrival_times {
            self.delivery_item_enricher
                .update_arrival_times(delivery_items)
                .await?;
        }

        for delivery_item in delivery_items.iter_mut() {
            if let Some(locations) = &locations {
                self.location_resolver
                    .set_locations_for_inbound_delivery_item(delivery_item, locations);
            }
            self.delivery_item_enricher
                .update_last_location_description(delivery_item)
                .await?;
            self.delivery_item_enricher
                .update_planned_arrival_at(delivery_item)
                .await?;
        }
        Ok(())
    }

    /// Normalizes the incoming URI and strips virtual expands
    fn prepare_request(context: &ODataContext) -> (String, ExpandRequest) {
        let uri = context.normalized_uri();
        let expands = ExpandRequest::from_uri(&uri);
        let backend_uri = QueryRewriter::remove_virtual_expands(&uri);
        debug!(uri = %uri, backend_uri = %backend_uri, ?expands, "Rewrote purchase order item read");
        (backend_uri, expands)
    }
}

#[async_trait]
impl<ER, LR, DE> ODataReadHandler for ReadPurchaseOrderItemsUseCase<ER, LR, DE>
where
    ER: EntityReader,
    LR: LocationResolver,
    DE: InboundDeliveryItemEnricher,
{
    async fn handle_read_entity_set(
        &self,
        context: &ODataContext,
    ) -> Result<ODataResultList<EntityMap>> {
        let (backend_uri, expands) = Self::prepare_request(context);

        let mut entity_list = self
            .entity_reader
            .read_entity_set(&backend_uri)
            .await?
            .try_map(|raw| decode_entity::<PurchaseOrderItem>(raw, PURCHASE_ORDER_ITEM_ENTITY))?;

        if expands.wants_locations {
            self.set_locations(&mut entity_list.results).await?;
        }
        if !entity_list.is_empty() {
            IdentifierNormalizer::normalize_purchase_order_items(&mut entity_list.results);
            self.update_completion_values(&mut entity_list.results)
                .await?;
        }

        entity_list.try_map(|item| encode_entity(&item, PURCHASE_ORDER_ITEM_ENTITY))
    }

    async fn handle_read_entity(&self, context: &ODataContext) -> Result<EntityMap> {
        let (backend_uri, expands) = Self::prepare_request(context);

        let raw = self.entity_reader.read_entity(&backend_uri).await?;
        let mut item: PurchaseOrderItem = decode_entity(raw, PURCHASE_ORDER_ITEM_ENTITY)?;

        self.update_completion_value(&mut item).await?;

        if expands.wants_locations {
            self.location_resolver
                .set_receiving_location(&mut item)
                .await?;
            self.location_resolver
                .set_supplier_location(&mut item)
                .await?;
        }

        self.process_expands(&mut item, expands).await?;

        IdentifierNormalizer::normalize_purchase_order_item(&mut item);

        encode_entity(&item, PURCHASE_ORDER_ITEM_ENTITY)
    }
}

fn decode_entity<T: DeserializeOwned>(raw: Value, entity: &str) -> Result<T> {
    serde_json::from_value(raw).map_err(|e| {
        PofError::EntityDecode {
            entity: entity.to_string(),
            details: e.to_string(),
        }
        .into()
    })
}

fn encode_entity<T: Serialize>(value: &T, entity: &str) -> Result<EntityMap> {
    let encode_error = |details: String| -> anyhow::Error {
        PofError::EntityEncode {
            entity: entity.to_string(),
            details,
        }
        .into()
    };

    match serde_json::to_value(value) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(encode_error(format!("expected an object, got {}", other))),
        Err(e) => Err(encode_error(e.to_string())),
    }
}
