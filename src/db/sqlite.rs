use crate::db::models::{DbStudent, DbTeacher, Role};
use crate::db::schema::{SEED_STUDENTS, SEED_TEACHERS, SEED_USERS, SQLITE_INIT};
use crate::error::RosterError;
use crate::types::roster::NewMember;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite, SqliteConnection};
use std::str::FromStr;
use subtle::ConstantTimeEq;
use tracing::{debug, info};

pub type SqlitePool = Pool<Sqlite>;

#[derive(Clone)]
pub struct RosterStore {
    pool: SqlitePool,
}

impl RosterStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open (creating if missing) the database behind `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self, RosterError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            // keeps `sqlite::memory:` databases alive between queries
            .min_connections(1)
            .connect_with(connect_opts)
            .await?;
        Ok(Self::new(pool))
    }

    /// Connect, create the schema and seed the sample rows.
    pub async fn bootstrap(database_url: &str, max_connections: u32) -> Result<Self, RosterError> {
        let store = Self::connect(database_url, max_connections).await?;
        store.init_schema().await?;
        store.seed_samples().await?;
        info!("database setup completed");
        Ok(store)
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL.
    pub async fn init_schema(&self) -> Result<(), RosterError> {
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Insert the fixed sample users, students and teachers.
    /// Rows that already exist are logged and skipped; any other failure aborts.
    pub async fn seed_samples(&self) -> Result<(), RosterError> {
        for &(username, password, role) in SEED_USERS {
            let res = sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
                .bind(username)
                .bind(password)
                .bind(role)
                .execute(&self.pool)
                .await
                .map_err(|e| RosterError::conflict_on(e, "user"));
            skip_existing(res.map(|_| ()), "user", username)?;
        }

        for &(name, grade, user_id) in SEED_STUDENTS {
            let res = sqlx::query("INSERT INTO students (name, grade, user_id) VALUES (?, ?, ?)")
                .bind(name)
                .bind(grade)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| RosterError::conflict_on(e, "student"));
            skip_existing(res.map(|_| ()), "student", name)?;
        }

        for &(name, subject, user_id) in SEED_TEACHERS {
            let res = sqlx::query("INSERT INTO teachers (name, subject, user_id) VALUES (?, ?, ?)")
                .bind(name)
                .bind(subject)
                .bind(user_id)
                .execute(&self.pool)
                .await
                .map_err(|e| RosterError::conflict_on(e, "teacher"));
            skip_existing(res.map(|_| ()), "teacher", name)?;
        }
        Ok(())
    }

    /// Plain-text credential check against the profile table for `role`.
    /// Returns `Ok(false)` when no user of that role matches.
    pub async fn verify_login(
        &self,
        role: Role,
        username: &str,
        password: &str,
    ) -> Result<bool, RosterError> {
        let table = role.table();
        let sql = format!(
            "SELECT users.password FROM {table} \
             INNER JOIN users ON {table}.user_id = users.user_id \
             WHERE users.username = ?"
        );
        let stored: Vec<String> = sqlx::query_scalar(&sql)
            .bind(username)
            .fetch_all(&self.pool)
            .await?;
        Ok(stored
            .iter()
            .any(|p| bool::from(p.as_bytes().ct_eq(password.as_bytes()))))
    }

    pub async fn list_teachers(&self) -> Result<Vec<DbTeacher>, RosterError> {
        let rows = sqlx::query_as::<_, DbTeacher>(
            "SELECT teacher_id, name, subject, user_id FROM teachers ORDER BY teacher_id",
        )
        .fetch_all(&self.pool)
        .await?;
        debug!(count = rows.len(), "listed teachers");
        Ok(rows)
    }

    pub async fn list_students(&self) -> Result<Vec<DbStudent>, RosterError> {
        let rows = sqlx::query_as::<_, DbStudent>(
            "SELECT student_id, name, grade, user_id FROM students ORDER BY student_id",
        )
        .fetch_all(&self.pool)
        .await?;
        debug!(count = rows.len(), "listed students");
        Ok(rows)
    }

    /// Create a teacher login and profile in one transaction. Returns the new user id.
    pub async fn create_teacher(&self, member: &NewMember) -> Result<i64, RosterError> {
        let mut tx = self.pool.begin().await?;
        let user_id = insert_user(&mut tx, member, Role::Teacher).await?;
        sqlx::query("INSERT INTO teachers (name, subject, user_id) VALUES (?, ?, ?)")
            .bind(&member.name)
            .bind(&member.detail)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RosterError::conflict_on(e, "teacher"))?;
        tx.commit().await?;
        info!(user_id, name = %member.name, "teacher created");
        Ok(user_id)
    }

    /// Create a student login and profile in one transaction. Returns the new user id.
    pub async fn create_student(&self, member: &NewMember) -> Result<i64, RosterError> {
        let mut tx = self.pool.begin().await?;
        let user_id = insert_user(&mut tx, member, Role::Student).await?;
        sqlx::query("INSERT INTO students (name, grade, user_id) VALUES (?, ?, ?)")
            .bind(&member.name)
            .bind(&member.detail)
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| RosterError::conflict_on(e, "student"))?;
        tx.commit().await?;
        info!(user_id, name = %member.name, "student created");
        Ok(user_id)
    }
}

async fn insert_user(
    conn: &mut SqliteConnection,
    member: &NewMember,
    role: Role,
) -> Result<i64, RosterError> {
    let res = sqlx::query("INSERT INTO users (username, password, role) VALUES (?, ?, ?)")
        .bind(&member.name)
        .bind(&member.password)
        .bind(role.as_str())
        .execute(conn)
        .await
        .map_err(|e| RosterError::conflict_on(e, "user"))?;
    Ok(res.last_insert_rowid())
}

fn skip_existing(
    res: Result<(), RosterError>,
    entity: &'static str,
    key: &str,
) -> Result<(), RosterError> {
    match res {
        Ok(()) => {
            info!(entity, key, "sample row added");
            Ok(())
        }
        Err(e) if e.is_conflict() => {
            info!(entity, key, "sample row already exists");
            Ok(())
        }
        Err(e) => Err(e),
    }
}
