use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdUserCheck, LdUsers};
use dioxus_free_icons::Icon;
use server::repo;
use shared_ui::StatCard;

use crate::format_helpers::format_rating;
use crate::nav::AdminView;
use crate::session::use_store;

#[component]
pub fn AdminHome(on_navigate: EventHandler<AdminView>) -> Element {
    let store = use_store();
    let data = store.read();
    let total_users = repo::user::total_users(&data);
    let pending = repo::mentor::pending(&data).len();
    let ratings = repo::feedback::ratings_by_mentor(&data);
    let rated: Vec<f64> = ratings.iter().map(|(_, avg)| *avg).filter(|a| *a > 0.0).collect();
    let overall = (!rated.is_empty()).then(|| rated.iter().sum::<f64>() / rated.len() as f64);

    rsx! {
        div { class: "grid-3",
            StatCard {
                label: "Total Users",
                value: total_users.to_string(),
                hint: Some("Click to manage students & mentors".to_string()),
                onclick: move |_| on_navigate.call(AdminView::UserManagement),
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 20, height: 20 } },
            }
            StatCard {
                label: "Pending Applications",
                value: pending.to_string(),
                hint: Some("Click to review".to_string()),
                onclick: move |_| on_navigate.call(AdminView::MentorApproval),
                icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 20, height: 20 } },
            }
            StatCard {
                label: "System Analytics",
                value: format_rating(overall),
                hint: Some("Click to view performance".to_string()),
                onclick: move |_| on_navigate.call(AdminView::Analytics),
                icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 20, height: 20 } },
            }
        }
    }
}
