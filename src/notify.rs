use async_channel::{Receiver, Sender};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notice {
    pub fn success<S: Into<String>>(description: S) -> Self {
        Self {
            title: "Success".into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn error<S: Into<String>>(description: S) -> Self {
        Self {
            title: "Error".into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn validation<S: Into<String>>(description: S) -> Self {
        Self {
            title: "Validation error".into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    pub fn info<T: Into<String>, S: Into<String>>(title: T, description: S) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Notifier {
    sender: Sender<Notice>,
}

impl Notifier {
    pub fn channel() -> (Notifier, Receiver<Notice>) {
        let (sender, receiver) = async_channel::unbounded();
        (Notifier { sender }, receiver)
    }

    pub fn notify(&self, notice: Notice) {
        // nobody listening is fine
        if self.sender.try_send(notice).is_err() {
            tracing::debug!("dropped notice, receiver closed");
        }
    }
}

pub fn drain(receiver: &Receiver<Notice>) -> Vec<Notice> {
    let mut notices = Vec::new();
    while let Ok(notice) = receiver.try_recv() {
        notices.push(notice);
    }
    notices
}

#[test]
fn drain_returns_queued_notices_in_order_test() {
    let (notifier, receiver) = Notifier::channel();
    notifier.notify(Notice::success("Place added successfully"));
    notifier.notify(Notice::error("Failed to load places"));

    let notices = drain(&receiver);
    assert_eq!(notices.len(), 2);
    assert_eq!(notices[0].title, "Success");
    assert_eq!(notices[1].variant, Variant::Destructive);
    assert!(drain(&receiver).is_empty());
}
