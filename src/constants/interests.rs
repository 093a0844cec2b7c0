/// Topic labels a user can pick from. Stored interests are not checked
/// against this list.
pub const INTEREST_CATALOG: [&str; 18] = [
    "Programming Languages",
    "Algorithms",
    "Software Engineering",
    "Game Development",
    "Computer Networks",
    "Data Science",
    "Operating Systems",
    "Mobile Development",
    "Database Systems",
    "Cloud Computing",
    "Machine Learning",
    "Cybersecurity",
    "Artificial Intelligence",
    "Data Structures",
    "Computer Graphics",
    "Web Development",
    "Testing",
    "Embedded Systems",
];
