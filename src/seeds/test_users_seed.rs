use std::fmt;

use crate::models::{Role, User};
use crate::services::UserStore;
use crate::utils::{hash_password, AppError};

/// Senha compartilhada pelos usuários de teste
pub const DEFAULT_PASSWORD: &str = "password123";

pub struct TestUser {
    pub email: &'static str,
    pub name: &'static str,
    pub role: Role,
}

/// Os 3 usuários de teste, um por papel
pub const TEST_USERS: [TestUser; 3] = [
    TestUser { email: "admin@test.com", name: "Admin User", role: Role::Admin },
    TestUser { email: "viewer@test.com", name: "Viewer User", role: Role::Viewer },
    TestUser { email: "partner@test.com", name: "Partner User", role: Role::Partner },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Created,
    AlreadyExists,
}

#[derive(Debug, Clone)]
pub struct SeedEntry {
    pub email: String,
    pub role: Role,
    pub outcome: SeedOutcome,
}

impl fmt::Display for SeedEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.outcome {
            SeedOutcome::Created => write!(f, "✓ Created user {} ({})", self.email, self.role),
            SeedOutcome::AlreadyExists => write!(f, "✓ User {} already exists", self.email),
        }
    }
}

#[derive(Debug, Default)]
pub struct SeedReport {
    pub entries: Vec<SeedEntry>,
}

impl SeedReport {
    pub fn created(&self) -> usize {
        self.count(SeedOutcome::Created)
    }

    pub fn skipped(&self) -> usize {
        self.count(SeedOutcome::AlreadyExists)
    }

    fn count(&self, outcome: SeedOutcome) -> usize {
        self.entries.iter().filter(|e| e.outcome == outcome).count()
    }
}

/// Insere os usuários de teste que ainda não existem (busca por email antes).
/// Processa um usuário por vez, na ordem de `TEST_USERS`.
pub async fn seed_test_users<S: UserStore + ?Sized>(
    store: &S,
    bcrypt_cost: u32,
) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    for test_user in TEST_USERS.iter() {
        let outcome = if store.email_exists(test_user.email).await? {
            SeedOutcome::AlreadyExists
        } else {
            let password_hash = hash_password(DEFAULT_PASSWORD, bcrypt_cost)?;
            let user = User::new(test_user.email, test_user.name, test_user.role, password_hash);
            store.insert(&user).await?;
            log::debug!("inserted user {} with id {}", user.email, user.id);
            SeedOutcome::Created
        };

        let entry = SeedEntry {
            email: test_user.email.to_string(),
            role: test_user.role,
            outcome,
        };
        println!("{}", entry);
        report.entries.push(entry);
    }

    Ok(report)
}

/// Banner final com as credenciais em texto puro para testes manuais
pub fn credentials_banner() -> String {
    let mut banner = String::from("\n✅ Test users setup complete!\n\nCredentials:\n");
    for test_user in TEST_USERS.iter() {
        let label = format!("{}:", capitalize(test_user.role.as_str()));
        banner.push_str(&format!("  {:<8} {} / {}\n", label, test_user.email, DEFAULT_PASSWORD));
    }
    banner
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
