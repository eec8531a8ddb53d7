use crate::controller::{Intake, TryIntake};
use crate::error::InputError;
use crate::request::require_isbn;
use application::transfer::{CreateBookDto, SearchBookDto};
use error_stack::Report;

#[derive(Debug)]
pub struct CreateBookRequest {
    pub title: String,
    pub author: String,
    pub isbn: String,
}

#[derive(Debug)]
pub struct SearchBookRequest {
    pub query: String,
}

pub struct BookTransformer;

impl TryIntake<CreateBookRequest> for BookTransformer {
    type To = CreateBookDto;
    type Error = Report<InputError>;
    fn emit(&self, input: CreateBookRequest) -> Result<Self::To, Self::Error> {
        Ok(CreateBookDto {
            isbn: require_isbn(&input.isbn)?,
            title: input.title,
            author: input.author,
        })
    }
}

impl Intake<SearchBookRequest> for BookTransformer {
    type To = SearchBookDto;
    fn emit(&self, input: SearchBookRequest) -> Self::To {
        SearchBookDto { query: input.query }
    }
}
