use uuid::Uuid;

use crate::api::PlaceAPI;
use crate::auth::User;
use crate::components::{PlaceForm, SubmitOutcome};
use crate::entities::Place;
use crate::notify::{Notice, Notifier};

#[derive(Clone, Debug)]
pub struct EditPlaceDialog {
    place_id: Uuid,
    pub form: PlaceForm,
    open: bool,
}

impl EditPlaceDialog {
    pub fn open(place: &Place) -> Self {
        Self {
            place_id: place.id,
            form: PlaceForm::from_place(place),
            open: true,
        }
    }

    pub fn place_id(&self) -> Uuid {
        self.place_id
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    #[tracing::instrument(skip_all, fields(place_id = %self.place_id))]
    pub async fn submit<A, F>(
        &mut self,
        api: &A,
        user: &User,
        notifier: &Notifier,
        on_success: F,
    ) -> SubmitOutcome
    where
        A: PlaceAPI + ?Sized,
        F: FnOnce(),
    {
        let outcome = self.try_submit(api, user, notifier).await;

        if outcome == SubmitOutcome::Saved {
            on_success();
        }

        outcome
    }

    async fn try_submit<A>(&mut self, api: &A, user: &User, notifier: &Notifier) -> SubmitOutcome
    where
        A: PlaceAPI + ?Sized,
    {
        let record = match self.form.to_record() {
            Ok(record) => record,
            Err(err) => {
                notifier.notify(Notice::validation(err.message));
                return SubmitOutcome::Invalid;
            }
        };

        if let Err(err) = api.update_place(user.clone(), self.place_id, record).await {
            tracing::warn!("update place failed: {}", err);
            notifier.notify(Notice::error(err.message));
            return SubmitOutcome::Failed;
        }

        notifier.notify(Notice::success("Place updated successfully"));
        self.open = false;

        SubmitOutcome::Saved
    }
}
