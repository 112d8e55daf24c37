use super::actions::MenuAction;
use super::error::MenuError;
use crate::framework::{ActorEntity, StatusTagged};
use crate::model::{Availability, MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
use async_trait::async_trait;

fn check_name(name: &str) -> Result<(), MenuError> {
    if name.trim().is_empty() {
        return Err(MenuError::ValidationError("item name is required".into()));
    }
    Ok(())
}

fn check_price(price: u32) -> Result<(), MenuError> {
    if price == 0 {
        return Err(MenuError::ValidationError("price must be positive".into()));
    }
    Ok(())
}

#[async_trait]
impl ActorEntity for MenuItem {
    type Id = MenuItemId;
    type Create = MenuItemCreate;
    type Update = MenuItemUpdate;
    type Action = MenuAction;
    type ActionResult = MenuItem;
    type Context = ();
    type Error = MenuError;

    fn id(&self) -> &MenuItemId {
        &self.id
    }

    fn from_create_params(id: MenuItemId, params: MenuItemCreate) -> Result<Self, MenuError> {
        check_name(&params.name)?;
        check_price(params.price)?;
        let category = params
            .category
            .ok_or_else(|| MenuError::ValidationError("category is required".into()))?;

        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            price: params.price,
            calories: params.calories,
            macros: params.macros,
            category,
            tags: params.tags,
            allergens: params.allergens,
            prep_minutes: params.prep_minutes,
            availability: params.available.into(),
        })
    }

    async fn on_update(&mut self, update: MenuItemUpdate, _ctx: &()) -> Result<(), MenuError> {
        // Validate everything before touching the record.
        if let Some(name) = &update.name {
            check_name(name)?;
        }
        if let Some(price) = update.price {
            check_price(price)?;
        }

        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(calories) = update.calories {
            self.calories = calories;
        }
        if let Some(macros) = update.macros {
            self.macros = macros;
        }
        if let Some(category) = update.category {
            self.category = category;
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(allergens) = update.allergens {
            self.allergens = allergens;
        }
        if let Some(prep_minutes) = update.prep_minutes {
            self.prep_minutes = prep_minutes;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: MenuAction, _ctx: &()) -> Result<MenuItem, MenuError> {
        match action {
            MenuAction::ToggleAvailability => {
                let next = self.availability.toggled();
                self.transition(next)?;
            }
            MenuAction::SetAvailability(to) if to == self.availability => {}
            MenuAction::SetAvailability(to) => {
                self.transition(to)?;
            }
        }
        Ok(self.clone())
    }
}

impl StatusTagged for MenuItem {
    type Status = Availability;

    fn status(&self) -> Availability {
        self.availability
    }

    fn set_status(&mut self, status: Availability) {
        self.availability = status;
    }

    fn transition_action(to: Availability) -> MenuAction {
        MenuAction::SetAvailability(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, Macros};

    fn lassi() -> MenuItemCreate {
        MenuItemCreate {
            name: "Mango Lassi".into(),
            description: "Sweet mango yogurt drink".into(),
            price: 120,
            calories: 220,
            macros: Macros::new(6, 40, 4),
            category: Some(Category::Drinks),
            tags: vec![],
            allergens: vec![],
            prep_minutes: 5,
            available: false,
        }
    }

    #[test]
    fn create_requires_name_category_and_price() {
        let mut nameless = lassi();
        nameless.name = " ".into();
        assert!(MenuItem::from_create_params(MenuItemId(5), nameless).is_err());

        let mut uncategorised = lassi();
        uncategorised.category = None;
        assert_eq!(
            MenuItem::from_create_params(MenuItemId(5), uncategorised),
            Err(MenuError::ValidationError("category is required".into()))
        );

        let mut free = lassi();
        free.price = 0;
        assert!(MenuItem::from_create_params(MenuItemId(5), free).is_err());
    }

    #[tokio::test]
    async fn toggle_flips_availability() {
        let mut item = MenuItem::from_create_params(MenuItemId(5), lassi()).unwrap();
        assert_eq!(item.availability, Availability::Unavailable);

        item.handle_action(MenuAction::ToggleAvailability, &()).await.unwrap();
        assert_eq!(item.availability, Availability::Available);
        item.handle_action(MenuAction::ToggleAvailability, &()).await.unwrap();
        assert_eq!(item.availability, Availability::Unavailable);
    }

    #[tokio::test]
    async fn setting_the_current_availability_is_a_no_op() {
        let mut item = MenuItem::from_create_params(MenuItemId(5), lassi()).unwrap();
        let same = item
            .handle_action(MenuAction::SetAvailability(Availability::Unavailable), &())
            .await
            .unwrap();
        assert_eq!(same.availability, Availability::Unavailable);
    }

    #[tokio::test]
    async fn rejected_update_leaves_item_untouched() {
        let mut item = MenuItem::from_create_params(MenuItemId(5), lassi()).unwrap();
        let update = MenuItemUpdate {
            description: Some("Now with extra mango".into()),
            price: Some(0),
            ..Default::default()
        };
        assert!(item.on_update(update, &()).await.is_err());
        assert_eq!(item.description, "Sweet mango yogurt drink");
        assert_eq!(item.price, 120);
    }
}
