use serde::Serialize;
use uuid::Uuid;

use crate::api::PlaceAPI;
use crate::auth::User;
use crate::components::{EditPlaceDialog, SubmitOutcome};
use crate::entities::{Category, Place, Role};
use crate::notify::{Notice, Notifier};

pub const DESCRIPTION_PREVIEW_CHARS: usize = 140;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ListView {
    Loading,
    Loaded {
        summary: String,
        empty: Option<EmptyState>,
        cards: Vec<PlaceCard>,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct EmptyState {
    pub title: String,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CardAction {
    Edit,
    Delete,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlaceCard {
    pub id: Uuid,
    pub name: String,
    pub image_url: Option<String>,
    pub address: Option<String>,
    pub is_famous: bool,
    pub description: String,
    pub category_label: String,
    pub badge_class: String,
    pub actions: Vec<CardAction>,
}

impl PlaceCard {
    fn new(place: &Place, role: Option<Role>) -> Self {
        let actions = if Role::is_developer(role) {
            vec![CardAction::Edit, CardAction::Delete]
        } else {
            vec![]
        };

        Self {
            id: place.id,
            name: place.name.clone(),
            image_url: place.image_url.clone().filter(|url| !url.is_empty()),
            address: place.address.clone().filter(|address| !address.is_empty()),
            is_famous: place.is_famous,
            description: preview(place.description.as_deref()),
            category_label: place.category.replacen('_', " ", 1),
            badge_class: Category::badge_class_for(&place.category).into(),
            actions,
        }
    }
}

fn preview(description: Option<&str>) -> String {
    let description = match description {
        Some(d) if !d.is_empty() => d,
        _ => return "No description available".into(),
    };

    if description.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return description.into();
    }

    let mut truncated: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    truncated.push('…');
    truncated
}

#[derive(Clone, Debug)]
pub struct PlacesList {
    places: Vec<Place>,
    loading: bool,
    editing: Option<EditPlaceDialog>,
}

impl PlacesList {
    pub fn new() -> Self {
        Self {
            places: vec![],
            loading: true,
            editing: None,
        }
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn editing(&self) -> Option<&EditPlaceDialog> {
        self.editing.as_ref()
    }

    pub fn editing_mut(&mut self) -> Option<&mut EditPlaceDialog> {
        self.editing.as_mut()
    }

    #[tracing::instrument(skip_all)]
    pub async fn fetch<A>(&mut self, api: &A, user: &User, notifier: &Notifier)
    where
        A: PlaceAPI + ?Sized,
    {
        self.loading = true;

        match api.list_places(user.clone()).await {
            Ok(places) => self.places = places,
            Err(err) => {
                tracing::warn!("loading places failed: {}", err);
                notifier.notify(Notice::error("Failed to load places"));
            }
        }

        self.loading = false;
    }

    #[tracing::instrument(skip(self, api, user, notifier))]
    pub async fn delete<A>(&mut self, api: &A, user: &User, notifier: &Notifier, id: Uuid) -> bool
    where
        A: PlaceAPI + ?Sized,
    {
        if let Err(err) = api.delete_place(user.clone(), id).await {
            tracing::warn!("delete place failed: {}", err);
            notifier.notify(Notice::error("Failed to delete place"));
            return false;
        }

        notifier.notify(Notice::success("Place deleted successfully"));
        self.fetch(api, user, notifier).await;

        true
    }

    pub fn begin_edit(&mut self, id: Uuid) -> bool {
        match self.places.iter().find(|place| place.id == id) {
            Some(place) => {
                self.editing = Some(EditPlaceDialog::open(place));
                true
            }
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    pub async fn submit_edit<A>(
        &mut self,
        api: &A,
        user: &User,
        notifier: &Notifier,
    ) -> Option<SubmitOutcome>
    where
        A: PlaceAPI + ?Sized,
    {
        let mut dialog = self.editing.take()?;

        let mut refresh = false;
        let outcome = dialog
            .submit(api, user, notifier, || refresh = true)
            .await;

        if dialog.is_open() {
            self.editing = Some(dialog);
        }

        if refresh {
            self.fetch(api, user, notifier).await;
        }

        Some(outcome)
    }

    pub fn view(&self, role: Option<Role>) -> ListView {
        if self.loading {
            return ListView::Loading;
        }

        let count = self.places.len();
        let summary = format!(
            "{} {} to explore",
            count,
            if count == 1 { "place" } else { "places" }
        );

        let empty = if count == 0 {
            let message = if Role::is_developer(role) {
                "Be the first to add a place!"
            } else {
                "Check back soon for new discoveries"
            };
            Some(EmptyState {
                title: "No places yet".into(),
                message: message.into(),
            })
        } else {
            None
        };

        ListView::Loaded {
            summary,
            empty,
            cards: self
                .places
                .iter()
                .map(|place| PlaceCard::new(place, role))
                .collect(),
        }
    }
}

impl Default for PlacesList {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::drain;
    use crate::testing::MemoryAPI;

    fn cards(view: ListView) -> Vec<PlaceCard> {
        match view {
            ListView::Loaded { cards, .. } => cards,
            ListView::Loading => panic!("still loading"),
        }
    }

    #[tokio::test]
    async fn loads_newest_first_with_summary_test() {
        let api = MemoryAPI::new();
        let user = api.add_user(None);
        api.seed_place("First", "cafe");
        api.seed_place("Second", "hidden_gem");
        let (notifier, _notices) = Notifier::channel();

        let mut list = PlacesList::new();
        assert_eq!(list.view(None), ListView::Loading);

        list.fetch(&api, &user, &notifier).await;

        match list.view(None) {
            ListView::Loaded { summary, empty, cards } => {
                assert_eq!(summary, "2 places to explore");
                assert_eq!(empty, None);
                assert_eq!(cards[0].name, "Second");
                assert_eq!(cards[0].category_label, "hidden gem");
                assert_eq!(cards[0].badge_class, "bg-accent text-accent-foreground");
                assert_eq!(cards[1].name, "First");
            }
            ListView::Loading => panic!("still loading"),
        }
    }

    #[tokio::test]
    async fn explorers_get_no_actions_test() {
        let api = MemoryAPI::new();
        let user = api.add_user(Some(Role::Explorer));
        api.seed_place("Harbour Walk", "nature");
        let (notifier, _notices) = Notifier::channel();

        let mut list = PlacesList::new();
        list.fetch(&api, &user, &notifier).await;

        for card in cards(list.view(Some(Role::Explorer))) {
            assert!(card.actions.is_empty());
        }
        for card in cards(list.view(None)) {
            assert!(card.actions.is_empty());
        }
        for card in cards(list.view(Some(Role::Developer))) {
            assert_eq!(card.actions, vec![CardAction::Edit, CardAction::Delete]);
        }
    }

    #[tokio::test]
    async fn empty_state_depends_on_role_test() {
        let api = MemoryAPI::new();
        let user = api.add_user(None);
        let (notifier, _notices) = Notifier::channel();

        let mut list = PlacesList::new();
        list.fetch(&api, &user, &notifier).await;

        let developer_empty = match list.view(Some(Role::Developer)) {
            ListView::Loaded { summary, empty, .. } => {
                assert_eq!(summary, "0 places to explore");
                empty.unwrap()
            }
            ListView::Loading => panic!("still loading"),
        };
        assert_eq!(developer_empty.message, "Be the first to add a place!");

        match list.view(None) {
            ListView::Loaded { empty, .. } => {
                assert_eq!(empty.unwrap().message, "Check back soon for new discoveries")
            }
            ListView::Loading => panic!("still loading"),
        }
    }

    #[tokio::test]
    async fn delete_removes_only_matching_place_test() {
        let api = MemoryAPI::new();
        let user = api.add_user(Some(Role::Developer));
        let keep = api.seed_place("Keep", "cafe");
        let gone = api.seed_place("Gone", "cafe");
        let (notifier, notices) = Notifier::channel();

        let mut list = PlacesList::new();
        list.fetch(&api, &user, &notifier).await;
        assert_eq!(list.places().len(), 2);

        assert!(list.delete(&api, &user, &notifier, gone.id).await);

        let ids: Vec<Uuid> = list.places().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![keep.id]);
        assert_eq!(api.stored_places().len(), 1);
        assert_eq!(api.list_calls(), 2);
        assert_eq!(
            drain(&notices),
            vec![Notice::success("Place deleted successfully")]
        );
    }

    #[tokio::test]
    async fn failed_delete_keeps_list_test() {
        let api = MemoryAPI::new();
        let user = api.add_user(Some(Role::Explorer));
        let place = api.seed_place("Keep", "cafe");
        let (notifier, notices) = Notifier::channel();

        let mut list = PlacesList::new();
        list.fetch(&api, &user, &notifier).await;

        assert!(!list.delete(&api, &user, &notifier, place.id).await);
        assert_eq!(list.places().len(), 1);
        assert_eq!(api.list_calls(), 1);
        assert_eq!(drain(&notices), vec![Notice::error("Failed to delete place")]);
    }

    #[tokio::test]
    async fn failed_fetch_notifies_test() {
        let api = MemoryAPI::new();
        let user = api.add_user(None);
        let (notifier, notices) = Notifier::channel();

        api.fail_next_read();

        let mut list = PlacesList::new();
        list.fetch(&api, &user, &notifier).await;
        assert!(!list.is_loading());
        assert_eq!(drain(&notices), vec![Notice::error("Failed to load places")]);
    }

    #[tokio::test]
    async fn submit_edit_refetches_list_test() {
        let api = MemoryAPI::new();
        let user = api.add_user(Some(Role::Developer));
        let place = api.seed_place("Pier 39", "entertainment");
        let (notifier, _notices) = Notifier::channel();

        let mut list = PlacesList::new();
        list.fetch(&api, &user, &notifier).await;

        assert!(list.begin_edit(place.id));
        list.editing_mut().unwrap().form.name = "Pier 39 Sea Lions".into();

        let outcome = list.submit_edit(&api, &user, &notifier).await;
        assert_eq!(outcome, Some(SubmitOutcome::Saved));
        assert!(list.editing().is_none());
        assert_eq!(api.list_calls(), 2);
        assert_eq!(list.places()[0].name, "Pier 39 Sea Lions");
    }

    #[tokio::test]
    async fn invalid_edit_keeps_dialog_open_test() {
        let api = MemoryAPI::new();
        let user = api.add_user(Some(Role::Developer));
        let place = api.seed_place("Pier 39", "entertainment");
        let (notifier, _notices) = Notifier::channel();

        let mut list = PlacesList::new();
        list.fetch(&api, &user, &notifier).await;

        list.begin_edit(place.id);
        list.editing_mut().unwrap().form.name = "P".into();

        let outcome = list.submit_edit(&api, &user, &notifier).await;
        assert_eq!(outcome, Some(SubmitOutcome::Invalid));
        assert!(list.editing().is_some());
        assert_eq!(api.list_calls(), 1);

        list.cancel_edit();
        assert_eq!(list.submit_edit(&api, &user, &notifier).await, None);
    }

    #[test]
    fn long_descriptions_are_truncated_test() {
        assert_eq!(preview(None), "No description available");
        assert_eq!(preview(Some("")), "No description available");
        assert_eq!(preview(Some("Quiet garden")), "Quiet garden");

        let long = "a".repeat(DESCRIPTION_PREVIEW_CHARS + 10);
        let shown = preview(Some(&long));
        assert_eq!(shown.chars().count(), DESCRIPTION_PREVIEW_CHARS + 1);
        assert!(shown.ends_with('…'));
    }
}
