use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayersError {
    #[error("Ошибка конфигурации: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),

    #[error("Неверные аргументы: {0}")]
    Usage(String),
}

impl LayersError {
    /// Код завершения процесса для данного вида ошибки
    pub fn exit_code(&self) -> i32 {
        match self {
            LayersError::Usage(_) => 1,
            LayersError::Config(_) => 2,
            LayersError::Io(_) => 74,
        }
    }
}

pub type Result<T> = std::result::Result<T, LayersError>;
