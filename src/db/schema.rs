//! SQL DDL and seed rows for the roster database.

/// SQLite schema:
/// - `users` holds credentials; `role` is restricted to `student`/`teacher`
/// - `students`/`teachers` reference `users` and are removed with their user
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    user_id INTEGER PRIMARY KEY AUTOINCREMENT,
    username TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL,
    role TEXT NOT NULL CHECK(role IN ('student', 'teacher'))
);

CREATE TABLE IF NOT EXISTS students (
    student_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    grade TEXT NOT NULL,
    user_id INTEGER,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS teachers (
    teacher_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL UNIQUE,
    subject TEXT NOT NULL,
    user_id INTEGER,
    FOREIGN KEY (user_id) REFERENCES users(user_id) ON DELETE CASCADE
);
"#;

/// `(username, password, role)`, inserted in order so ids run 1..=4.
pub const SEED_USERS: &[(&str, &str, &str)] = &[
    ("Ramkumar", "ram", "student"),
    ("Karthikeyan", "karthi", "teacher"),
    ("Sabarinathan", "sabari", "student"),
    ("Marudhupandi", "marudhu", "teacher"),
];

/// `(name, grade, user_id)`
pub const SEED_STUDENTS: &[(&str, &str, i64)] = &[("Ramkumar", "A", 1), ("Sabarinathan", "B", 3)];

/// `(name, subject, user_id)`
pub const SEED_TEACHERS: &[(&str, &str, i64)] =
    &[("Karthikeyan", "Maths", 2), ("Marudhupandi", "Science", 4)];
