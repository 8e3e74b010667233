use crate::api::PlaceAPI;
use crate::auth::User;
use crate::components::{PlaceForm, SubmitOutcome};
use crate::notify::{Notice, Notifier};

#[derive(Clone, Debug, Default)]
pub struct AddPlaceDialog {
    pub form: PlaceForm,
    open: bool,
}

impl AddPlaceDialog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn set_open(&mut self, open: bool) {
        self.open = open;
    }

    #[tracing::instrument(skip_all, fields(user_id = %user.id))]
    pub async fn submit<A>(&mut self, api: &A, user: &User, notifier: &Notifier) -> SubmitOutcome
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

        if let Err(err) = api.create_place(user.clone(), record).await {
            tracing::warn!("create place failed: {}", err);
            notifier.notify(Notice::error(err.message));
            return SubmitOutcome::Failed;
        }

        notifier.notify(Notice::success("Place added successfully"));
        self.form = PlaceForm::default();
        self.open = false;

        SubmitOutcome::Saved
    }
}
