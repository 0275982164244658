//! Demo data seeded into every fresh [`MockStore`](crate::store::MockStore).

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use shared_types::{
    ActivityLogEntry, Admin, CareerAssessmentStatus, CareerQuestion, Feedback, IssueReport,
    IssueStatus, Mark, Mentor, MentorStatus, QuestionKind, Role, SessionRequest, SessionStatus,
    Student, User, UserSummary,
};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, s)
        .single()
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

const MARIA_CAREER_REPORT: &str = "\
### Suggested Career Path: Data Scientist

**Strengths Alignment:**
Your high scores in Analytical Thinking and proficiency in Python and Data Visualization make you an excellent candidate for a career in data science. You have a natural aptitude for uncovering insights from complex datasets.

**Areas for Development:**
Your assessment indicates a need to strengthen your foundational knowledge in Machine Learning Theory. A deeper theoretical understanding will complement your practical skills.

**Recommended Actions:**
1. **Advanced Coursework:** Enroll in a graduate-level course on Statistical Learning or Advanced Machine Learning.
2. **Kaggle Competitions:** Participate in Kaggle competitions to apply your skills to real-world problems and learn from the community.
3. **Contribute to Open Source:** Find a data science library on GitHub and contribute to its development. This will improve your coding skills and expose you to production-level code.";

pub fn students() -> Vec<Student> {
    vec![
        Student {
            user: User::new("student-1", "Alex Johnson", "alex.j@university.edu", Role::Student),
            major: "Computer Science".into(),
            weaknesses: strings(&["Advanced Algorithms", "Database Management"]),
            strengths: strings(&["Frontend Development", "UI/UX Design"]),
            assigned_mentor_id: Some("mentor-1".into()),
            performance: vec![
                Mark::new("Algorithms", 65, day(2023, 9, 15)),
                Mark::new("Databases", 72, day(2023, 9, 20)),
                Mark::new("Web Dev", 88, day(2023, 9, 25)),
                Mark::new("Algorithms", 75, day(2023, 10, 15)),
                Mark::new("Databases", 78, day(2023, 10, 20)),
                Mark::new("Web Dev", 92, day(2023, 10, 25)),
            ],
            career_assessment_status: CareerAssessmentStatus::NotStarted,
            career_report: None,
        },
        Student {
            user: User::new("student-2", "Maria Garcia", "maria.g@university.edu", Role::Student),
            major: "Data Science".into(),
            weaknesses: strings(&["Machine Learning Theory"]),
            strengths: strings(&["Python Programming", "Data Visualization"]),
            assigned_mentor_id: Some("mentor-2".into()),
            performance: vec![
                Mark::new("Statistics", 85, day(2023, 9, 15)),
                Mark::new("ML Theory", 70, day(2023, 9, 20)),
                Mark::new("Python", 95, day(2023, 9, 25)),
                Mark::new("Statistics", 88, day(2023, 10, 15)),
                Mark::new("ML Theory", 78, day(2023, 10, 20)),
                Mark::new("Python", 97, day(2023, 10, 25)),
            ],
            career_assessment_status: CareerAssessmentStatus::Completed,
            career_report: Some(MARIA_CAREER_REPORT.into()),
        },
        Student {
            user: User::new("student-3", "Chen Wei", "chen.w@university.edu", Role::Student),
            major: "Electrical Engineering".into(),
            weaknesses: strings(&["Signal Processing", "Circuit Design"]),
            strengths: strings(&["Physics", "Mathematics"]),
            assigned_mentor_id: Some("mentor-1".into()),
            performance: vec![
                Mark::new("Circuits", 70, day(2023, 9, 15)),
                Mark::new("Signals", 68, day(2023, 9, 20)),
                Mark::new("Physics", 90, day(2023, 9, 25)),
                Mark::new("Circuits", 75, day(2023, 10, 15)),
                Mark::new("Signals", 72, day(2023, 10, 20)),
                Mark::new("Physics", 94, day(2023, 10, 25)),
            ],
            career_assessment_status: CareerAssessmentStatus::NotStarted,
            career_report: None,
        },
        Student {
            user: User::new("student-4", "Fatima Al-Sayed", "fatima.a@university.edu", Role::Student),
            major: "Cybersecurity".into(),
            weaknesses: strings(&["Cryptography"]),
            strengths: strings(&["Networking", "Ethical Hacking"]),
            assigned_mentor_id: Some("mentor-3".into()),
            performance: vec![
                Mark::new("Networking", 92, day(2023, 10, 1)),
                Mark::new("Cryptography", 75, day(2023, 10, 8)),
                Mark::new("Pen Testing", 88, day(2023, 10, 15)),
            ],
            career_assessment_status: CareerAssessmentStatus::PendingVerification,
            career_report: Some("AI analysis pending mentor review.".into()),
        },
        Student {
            user: User::new("student-5", "Ben Carter", "ben.c@university.edu", Role::Student),
            major: "Business Administration".into(),
            weaknesses: strings(&["Financial Accounting"]),
            strengths: strings(&["Marketing", "Public Speaking"]),
            assigned_mentor_id: Some("mentor-4".into()),
            performance: vec![
                Mark::new("Marketing", 95, day(2023, 10, 5)),
                Mark::new("Accounting", 72, day(2023, 10, 12)),
                Mark::new("Management", 85, day(2023, 10, 19)),
            ],
            career_assessment_status: CareerAssessmentStatus::NotStarted,
            career_report: None,
        },
    ]
}

pub fn mentors() -> Vec<Mentor> {
    vec![
        Mentor {
            user: User::new("mentor-1", "Dr. Evelyn Reed", "e.reed@faculty.edu", Role::Mentor),
            expertise: strings(&["Algorithms", "Data Structures", "System Design"]),
            mentee_ids: strings(&["student-1", "student-3"]),
            status: MentorStatus::Approved,
            bio: "15+ years of experience in software engineering and a passion for demystifying complex algorithms. My goal is to build strong foundational knowledge in my mentees.".into(),
        },
        Mentor {
            user: User::new("mentor-2", "Prof. David Chen", "d.chen@faculty.edu", Role::Mentor),
            expertise: strings(&["Machine Learning", "AI Ethics", "Python"]),
            mentee_ids: strings(&["student-2"]),
            status: MentorStatus::Approved,
            bio: "Researcher in the field of ethical AI. I help students navigate the technical and moral complexities of machine learning.".into(),
        },
        Mentor {
            user: User::new("mentor-3", "Dr. Sarah Banks", "s.banks@faculty.edu", Role::Mentor),
            expertise: strings(&["Cybersecurity", "Networking"]),
            mentee_ids: strings(&["student-4"]),
            status: MentorStatus::Approved,
            bio: "Cybersecurity expert with a focus on ethical hacking and network defense. I enjoy preparing students for the fast-paced world of digital security.".into(),
        },
        Mentor {
            user: User::new("mentor-4", "Mr. Tom Powell", "t.powell@industry.com", Role::Mentor),
            expertise: strings(&["Software Engineering", "Agile Methodologies", "Business Strategy"]),
            mentee_ids: strings(&["student-5"]),
            status: MentorStatus::Approved,
            bio: "Industry veteran with experience in scaling tech startups. I mentor students on the intersection of technology and business.".into(),
        },
        Mentor {
            user: User::new("mentor-5", "Dr. Angela Merkel", "a.merkel@faculty.edu", Role::Mentor),
            expertise: strings(&["Quantum Computing", "Physics"]),
            mentee_ids: vec![],
            status: MentorStatus::Pending,
            bio: "Theoretical physicist exploring the boundaries of quantum computing. Looking to mentor students with a strong background in mathematics and physics.".into(),
        },
        Mentor {
            user: User::new("mentor-6", "Mr. John Smith", "j.smith@industry.com", Role::Mentor),
            expertise: strings(&["Product Management", "Marketing"]),
            mentee_ids: vec![],
            status: MentorStatus::Rejected,
            bio: "Product manager with a focus on user-centric design.".into(),
        },
    ]
}

pub fn admin() -> Admin {
    User::new("admin-1", "Dean Thompson", "dean.t@university.edu", Role::Admin)
}

pub fn feedback() -> Vec<Feedback> {
    let entry = |id: &str, mentor: &str, student: &str, rating: u8, comment: &str, date| Feedback {
        id: id.into(),
        mentor_id: mentor.into(),
        student_id: student.into(),
        rating,
        comment: comment.into(),
        date,
    };
    vec![
        entry("f-1", "mentor-1", "student-1", 5, "Dr. Reed is amazing! She explains complex topics so clearly.", day(2023, 10, 28)),
        entry("f-2", "mentor-2", "student-2", 4, "Prof. Chen is very knowledgeable, but sometimes the sessions feel a bit rushed.", day(2023, 10, 29)),
        entry("f-3", "mentor-1", "student-3", 4, "Great session, really helped me with my project planning.", day(2023, 11, 1)),
        entry("f-4", "mentor-3", "student-4", 5, "Dr. Banks provided incredible insights into the cybersecurity industry.", day(2023, 11, 2)),
        entry("f-5", "mentor-2", "student-2", 5, "Follow-up session was much better paced. Prof. Chen is a fantastic mentor!", day(2023, 11, 5)),
        entry("f-6", "mentor-4", "student-5", 4, "Mr. Powell gave me great advice on my business plan.", day(2023, 11, 6)),
        entry("f-7", "mentor-1", "student-1", 5, "Helped me debug a very tricky algorithm problem. Lifesaver!", day(2023, 11, 10)),
    ]
}

pub fn session_requests() -> Vec<SessionRequest> {
    let request = |id: &str, student: &str, mentor: &str, topic: &str, status, date| SessionRequest {
        id: id.into(),
        student_id: student.into(),
        mentor_id: mentor.into(),
        topic: topic.into(),
        status,
        date,
    };
    vec![
        request("sr-1", "student-1", "mentor-1", "Help with my final year project", SessionStatus::Pending, day(2023, 11, 5)),
        request("sr-2", "student-2", "mentor-2", "Career advice and resume review", SessionStatus::Approved, day(2023, 11, 3)),
        request("sr-3", "student-3", "mentor-1", "Confused about signal processing concepts", SessionStatus::Pending, day(2023, 11, 8)),
    ]
}

pub fn issue_reports() -> Vec<IssueReport> {
    let issue = |id: &str, student: &str, description: &str, status, date| IssueReport {
        id: id.into(),
        student_id: student.into(),
        description: description.into(),
        status,
        date,
    };
    vec![
        issue("ir-1", "student-1", "The score for my 'Algorithms' test on 2023-10-15 is incorrect. It should be 78, not 75.", IssueStatus::Open, day(2023, 11, 1)),
        issue("ir-2", "student-3", "My 'Circuits' score from September is missing from the dashboard.", IssueStatus::Open, day(2023, 11, 4)),
        issue("ir-3", "student-2", "Typo in 'ML Theory' subject name.", IssueStatus::Resolved, day(2023, 10, 30)),
    ]
}

pub fn activity_log() -> Vec<ActivityLogEntry> {
    let actor = |id: &str, name: &str, role| UserSummary {
        id: id.into(),
        name: name.into(),
        role,
    };
    let dean = || actor("admin-1", "Dean Thompson", Role::Admin);
    let entry = |id: &str, actor, action: &str, timestamp| ActivityLogEntry {
        id: id.into(),
        actor,
        action: action.into(),
        timestamp,
    };
    vec![
        entry("log-1", dean(), "Logged in", at(2023, 11, 12, 10, 0, 0)),
        entry("log-2", actor("mentor-1", "Dr. Evelyn Reed", Role::Mentor), "Logged in", at(2023, 11, 12, 10, 5, 0)),
        entry("log-3", actor("student-1", "Alex Johnson", Role::Student), "Requested a session with Dr. Evelyn Reed", at(2023, 11, 12, 10, 15, 23)),
        entry("log-4", dean(), "Approved mentor application for Dr. Sarah Banks", at(2023, 11, 12, 11, 30, 10)),
        entry("log-5", actor("mentor-2", "Prof. David Chen", Role::Mentor), "Submitted a session report for Maria Garcia", at(2023, 11, 12, 14, 0, 55)),
        entry("log-6", actor("student-2", "Maria Garcia", Role::Student), "Submitted feedback for Prof. David Chen", at(2023, 11, 12, 14, 25, 18)),
        entry("log-7", dean(), "Rejected mentor application for Mr. John Smith", at(2023, 11, 12, 15, 0, 0)),
    ]
}

/// The fixed career-path questionnaire.
pub fn career_questions() -> Vec<CareerQuestion> {
    let question = |id: &str, text: &str, kind| CareerQuestion {
        id: id.into(),
        text: text.into(),
        kind,
    };
    vec![
        question(
            "q1",
            "Describe a project or accomplishment, either in or out of school, that you are particularly proud of. What did you do, and what did you enjoy about it?",
            QuestionKind::Text,
        ),
        question(
            "q2",
            "Which of these work environments sounds most appealing to you?",
            QuestionKind::Mcq {
                options: strings(&[
                    "A fast-paced, collaborative office with lots of team projects.",
                    "A quiet, independent setting where I can focus deeply on my own tasks.",
                    "A flexible, remote environment where I can manage my own schedule.",
                    "A hands-on workshop or lab where I can build or experiment with things.",
                ]),
            },
        ),
        question(
            "q3",
            "What kind of problems do you enjoy solving? (e.g., puzzles, helping people with their issues, organizing complex systems, building things)",
            QuestionKind::Text,
        ),
        question(
            "q4",
            "On a scale of 1 to 5, how much do you enjoy leading a team or project?",
            QuestionKind::Scale {
                min: 1,
                max: 5,
                min_label: "Strongly Dislike".into(),
                max_label: "Strongly Enjoy".into(),
            },
        ),
        question(
            "q5",
            "When learning something new, you prefer:",
            QuestionKind::Mcq {
                options: strings(&[
                    "Reading books and theoretical articles.",
                    "Watching tutorials and practical demonstrations.",
                    "Jumping right in and learning by doing.",
                    "Discussing concepts with others.",
                ]),
            },
        ),
        question(
            "q6",
            "What are three things you value most in a career? (e.g., financial security, creativity, helping others, work-life balance, leadership)",
            QuestionKind::Text,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn six_career_questions_with_unique_ids() {
        let questions = career_questions();
        assert_eq!(questions.len(), 6);
        let mut ids: Vec<_> = questions.iter().map(|q| q.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids, vec!["q1", "q2", "q3", "q4", "q5", "q6"]);
    }

    #[test]
    fn fixture_timestamps_are_real_dates() {
        assert!(activity_log().iter().all(|e| e.timestamp.timestamp() > 0));
        assert!(feedback().iter().all(|f| f.date > NaiveDate::default()));
    }

    #[test]
    fn mentee_lists_match_assignments() {
        let students = students();
        for mentor in mentors() {
            for mentee in &mentor.mentee_ids {
                let student = students.iter().find(|s| s.id() == mentee).unwrap();
                assert_eq!(student.assigned_mentor_id.as_deref(), Some(mentor.id()));
            }
        }
    }
}
