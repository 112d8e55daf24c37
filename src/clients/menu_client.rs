use crate::framework::{
    ActorClient, FrameworkError, ListQuery, ResourceClient, StatusFilter, WorkflowClient,
};
use crate::menu_actor::{MenuAction, MenuError};
use crate::model::{Availability, Category, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Menu actor.
#[derive(Clone)]
pub struct MenuClient {
    inner: ResourceClient<MenuItem>,
}

impl MenuClient {
    pub fn new(inner: ResourceClient<MenuItem>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params))]
    pub async fn add_item(&self, params: MenuItemCreate) -> Result<MenuItemId, MenuError> {
        debug!(?params, "add_item called");
        let name = params.name.clone();
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(%id, "{name} has been added to your menu");
        Ok(id)
    }

    #[instrument(skip(self, update))]
    pub async fn edit_item(&self, id: MenuItemId, update: MenuItemUpdate) -> Result<MenuItem, MenuError> {
        debug!(?update, "edit_item called");
        let item = self.inner.update(id, update).await.map_err(Self::map_error)?;
        info!(%id, "{} has been updated", item.name);
        Ok(item)
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, id: MenuItemId) -> Result<bool, MenuError> {
        let removed = self.delete(id).await?;
        if removed {
            info!(%id, "Menu item has been removed");
        }
        Ok(removed)
    }

    #[instrument(skip(self))]
    pub async fn toggle_availability(&self, id: MenuItemId) -> Result<MenuItem, MenuError> {
        let item = self
            .inner
            .perform_action(id, MenuAction::ToggleAvailability)
            .await
            .map_err(Self::map_error)?;
        debug!(%id, availability = %item.availability, "Availability toggled");
        Ok(item)
    }

    /// Menu page: category dropdown plus search over name and category.
    pub async fn browse(
        &self,
        availability: StatusFilter<Availability>,
        category: Option<Category>,
        search: &str,
    ) -> Result<Vec<MenuItem>, MenuError> {
        let mut query = ListQuery::new().status(availability).search(search);
        if let Some(category) = category {
            query = query.with(move |item: &MenuItem| item.category == category);
        }
        self.list(query).await
    }
}

#[async_trait]
impl ActorClient<MenuItem> for MenuClient {
    type Error = MenuError;

    fn inner(&self) -> &ResourceClient<MenuItem> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error(MenuError::NotFound, MenuError::ActorCommunicationError)
    }
}

impl WorkflowClient<MenuItem> for MenuClient {}
