//! Which sub-view each dashboard is showing. Every dashboard keeps one of
//! these in a signal and renders it through a single `match`.

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdActivity, LdBriefcase, LdCalendar, LdClock, LdLayoutDashboard, LdMessageSquare, LdStar,
    LdTrendingUp, LdUpload, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StudentView {
    #[default]
    Dashboard,
    AiAdvisor,
    Performance,
    CareerPath,
}

impl StudentView {
    pub const ALL: [StudentView; 4] = [
        StudentView::Dashboard,
        StudentView::AiAdvisor,
        StudentView::Performance,
        StudentView::CareerPath,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            StudentView::Dashboard => "Dashboard",
            StudentView::AiAdvisor => "AI Advisor",
            StudentView::Performance => "Performance",
            StudentView::CareerPath => "Career Path",
        }
    }

    pub fn icon(&self) -> Element {
        match self {
            StudentView::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
            StudentView::AiAdvisor => rsx! { Icon::<LdMessageSquare> { icon: LdMessageSquare, width: 18, height: 18 } },
            StudentView::Performance => rsx! { Icon::<LdTrendingUp> { icon: LdTrendingUp, width: 18, height: 18 } },
            StudentView::CareerPath => rsx! { Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 } },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MentorView {
    #[default]
    Dashboard,
    Mentees,
    /// Detail page for one mentee, reached from the mentee list.
    MenteeProfile { student_id: String },
    SessionRequests,
    UploadMarks,
}

impl MentorView {
    /// Entries shown in the sidebar.
    pub const NAV: [MentorView; 4] = [
        MentorView::Dashboard,
        MentorView::Mentees,
        MentorView::SessionRequests,
        MentorView::UploadMarks,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MentorView::Dashboard => "Dashboard",
            MentorView::Mentees | MentorView::MenteeProfile { .. } => "My Mentees",
            MentorView::SessionRequests => "Session Requests",
            MentorView::UploadMarks => "Upload Marks",
        }
    }

    /// Whether the sidebar entry `nav` should be highlighted for this view.
    pub fn highlights(&self, nav: &MentorView) -> bool {
        match (self, nav) {
            (MentorView::MenteeProfile { .. }, MentorView::Mentees) => true,
            (current, nav) => current == nav,
        }
    }

    pub fn icon(&self) -> Element {
        match self {
            MentorView::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
            MentorView::Mentees | MentorView::MenteeProfile { .. } => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
            MentorView::SessionRequests => rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
            MentorView::UploadMarks => rsx! { Icon::<LdUpload> { icon: LdUpload, width: 18, height: 18 } },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminView {
    #[default]
    Dashboard,
    UserManagement,
    MentorApproval,
    Feedback,
    Analytics,
    ActivityLog,
}

impl AdminView {
    pub const ALL: [AdminView; 6] = [
        AdminView::Dashboard,
        AdminView::UserManagement,
        AdminView::MentorApproval,
        AdminView::Feedback,
        AdminView::Analytics,
        AdminView::ActivityLog,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AdminView::Dashboard => "Dashboard",
            AdminView::UserManagement => "User Management",
            AdminView::MentorApproval => "Mentor Approval",
            AdminView::Feedback => "Feedback",
            AdminView::Analytics => "Analytics",
            AdminView::ActivityLog => "Activity Log",
        }
    }

    pub fn icon(&self) -> Element {
        match self {
            AdminView::Dashboard => rsx! { Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 } },
            AdminView::UserManagement => rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
            AdminView::MentorApproval => rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
            AdminView::Feedback => rsx! { Icon::<LdStar> { icon: LdStar, width: 18, height: 18 } },
            AdminView::Analytics => rsx! { Icon::<LdActivity> { icon: LdActivity, width: 18, height: 18 } },
            AdminView::ActivityLog => rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_starts_on_dashboard() {
        assert_eq!(StudentView::default(), StudentView::Dashboard);
        assert_eq!(MentorView::default(), MentorView::Dashboard);
        assert_eq!(AdminView::default(), AdminView::Dashboard);
    }

    #[test]
    fn mentee_profile_highlights_mentee_list() {
        let profile = MentorView::MenteeProfile {
            student_id: "student-1".into(),
        };
        assert!(profile.highlights(&MentorView::Mentees));
        assert!(!profile.highlights(&MentorView::Dashboard));
        assert_eq!(profile.label(), "My Mentees");
    }

    #[test]
    fn labels_are_unique_per_dashboard() {
        let mut labels: Vec<_> = AdminView::ALL.iter().map(AdminView::label).collect();
        labels.dedup();
        assert_eq!(labels.len(), AdminView::ALL.len());
    }
}
