use leptos::prelude::*;

#[cfg(feature = "hydrate")]
const DISMISS_AFTER: std::time::Duration = std::time::Duration::from_secs(5);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

impl NoticeLevel {
    pub fn class(self) -> &'static str {
        match self {
            NoticeLevel::Info => "toast toast-info",
            NoticeLevel::Error => "toast toast-error",
        }
    }
}

#[derive(Clone, Debug)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub level: NoticeLevel,
}

/// Short-lived notices shown above every page, e.g. "Signed out".
#[derive(Clone, Copy)]
pub struct Notices {
    items: RwSignal<Vec<Notice>>,
    next_id: StoredValue<u64>,
}

impl Notices {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    /// Shows a notice and, in the browser, dismisses it after five seconds.
    pub fn push(&self, message: impl Into<String>, level: NoticeLevel) {
        #[allow(unused_variables)]
        let id = self.add(message, level);

        #[cfg(feature = "hydrate")]
        {
            let notices = *self;
            set_timeout(move || notices.dismiss(id), DISMISS_AFTER);
        }
    }

    pub fn add(&self, message: impl Into<String>, level: NoticeLevel) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.items.update(|items| {
            items.push(Notice {
                id,
                message: message.into(),
                level,
            })
        });
        id
    }

    pub fn dismiss(&self, id: u64) {
        self.items.update(|items| items.retain(|n| n.id != id));
    }

    pub fn current(&self) -> Vec<Notice> {
        self.items.get_untracked()
    }
}

impl Default for Notices {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notices() -> Notices {
    expect_context::<Notices>()
}

#[component]
pub fn NoticeProvider(children: Children) -> impl IntoView {
    let notices = Notices::new();
    provide_context(notices);

    view! {
        {children()}
        <div class="toast-container">
            <For
                each=move || notices.items.get()
                key=|notice| notice.id
                let:notice
            >
                <div class=notice.level.class()>{notice.message.clone()}</div>
            </For>
        </div>
    }
}

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;
