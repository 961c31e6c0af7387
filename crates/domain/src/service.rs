use log::{debug, error};

use crate::{
    CatalogRepository, Category, CategoryID, CreateError, ExerciseTemplate, Program,
    ProgramRepository, ReadError, SavedProgram,
};

#[allow(async_fn_in_trait)]
pub trait CatalogService {
    async fn get_categories(&self) -> Result<Vec<Category>, ReadError>;
    async fn get_templates(
        &self,
        category_id: &CategoryID,
    ) -> Result<Vec<ExerciseTemplate>, ReadError>;
}

#[allow(async_fn_in_trait)]
pub trait ProgramService {
    async fn save_program(&self, program: Program) -> Result<SavedProgram, CreateError>;
}

pub struct Service<R> {
    repository: R,
}

impl<R> Service<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

macro_rules! log_on_error {
    ($func: expr, $error: ident, $action: literal, $entity: literal) => {{
        let result = $func.await;
        match result {
            Ok(_) => {}
            Err(ref err) => match err {
                $error::Storage(crate::StorageError::NoConnection) => {
                    debug!("failed to {} {}: {err}", $action, $entity);
                }
                _ => {
                    error!("failed to {} {}: {err}", $action, $entity);
                }
            },
        }
        result
    }};
}

impl<R: CatalogRepository> CatalogService for Service<R> {
    async fn get_categories(&self) -> Result<Vec<Category>, ReadError> {
        log_on_error!(
            self.repository.read_categories(),
            ReadError,
            "get",
            "categories"
        )
    }

    async fn get_templates(
        &self,
        category_id: &CategoryID,
    ) -> Result<Vec<ExerciseTemplate>, ReadError> {
        log_on_error!(
            self.repository.read_templates(category_id),
            ReadError,
            "get",
            "exercise templates"
        )
    }
}

impl<R: ProgramRepository> ProgramService for Service<R> {
    async fn save_program(&self, program: Program) -> Result<SavedProgram, CreateError> {
        log_on_error!(
            self.repository.create_program(program),
            CreateError,
            "save",
            "program"
        )
    }
}
