use bcrypt::hash;

use super::AppError;

/// Gera o hash bcrypt de uma senha (salt aleatório a cada chamada)
pub fn hash_password(password: &str, cost: u32) -> Result<String, AppError> {
    hash(password, cost).map_err(AppError::from)
}

/// Confere uma senha em texto puro contra um hash bcrypt armazenado
#[cfg(test)]
pub fn verify_password(password: &str, hashed: &str) -> Result<bool, AppError> {
    bcrypt::verify(password, hashed).map_err(AppError::from)
}
