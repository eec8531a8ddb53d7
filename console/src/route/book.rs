use std::io::{BufRead, Write};

use application::service::{CreateBookService, GetBookService};
use error_stack::Report;
use kernel::KernelError;

use crate::controller::Controller;
use crate::handler::Handler;
use crate::request::{BookTransformer, CreateBookRequest, SearchBookRequest};
use crate::response::{BookPresenter, SearchPresenter};
use crate::route::{reject, Flow};
use crate::terminal::Terminal;

pub fn add_book<R: BufRead, W: Write>(
    module: &mut Handler,
    terminal: &mut Terminal<R, W>,
) -> error_stack::Result<Flow, KernelError> {
    let Some(title) = terminal.prompt("Enter Book Title: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(author) = terminal.prompt("Enter Author Name: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(isbn) = terminal.prompt("Enter ISBN: ")? else {
        return Ok(Flow::Exit);
    };

    let request = CreateBookRequest {
        title,
        author,
        isbn,
    };
    let transformed = match Controller::new(BookTransformer, BookPresenter).try_intake(request) {
        Ok(transformed) => transformed,
        Err(report) => return reject(terminal, report),
    };
    let lines = transformed
        .handle(|dto| Ok::<_, Report<KernelError>>(module.catalog_mut().create_book(dto)))?;
    terminal.print_lines(lines)?;
    Ok(Flow::Continue)
}

pub fn search_book<R: BufRead, W: Write>(
    module: &mut Handler,
    terminal: &mut Terminal<R, W>,
) -> error_stack::Result<Flow, KernelError> {
    let Some(query) = terminal.prompt("Enter search query (Title, Author, or ISBN): ")? else {
        return Ok(Flow::Exit);
    };

    let lines = Controller::new(BookTransformer, SearchPresenter)
        .intake(SearchBookRequest { query })
        .handle(|dto| Ok::<_, Report<KernelError>>(module.catalog().search_books(&dto)))?;
    terminal.print_lines(lines)?;
    Ok(Flow::Continue)
}

pub fn view_books<R: BufRead, W: Write>(
    module: &mut Handler,
    terminal: &mut Terminal<R, W>,
) -> error_stack::Result<Flow, KernelError> {
    let lines = Controller::new((), BookPresenter)
        .bypass(|| Ok::<_, Report<KernelError>>(module.catalog().get_all_books()))?;
    terminal.print_lines(lines)?;
    Ok(Flow::Continue)
}
