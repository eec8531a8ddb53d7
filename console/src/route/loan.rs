use std::io::{BufRead, Write};

use application::service::{CheckoutService, GetLoanService, ReturnService};
use error_stack::Report;
use kernel::KernelError;

use crate::controller::Controller;
use crate::error::ErrorNotice;
use crate::handler::Handler;
use crate::request::{CheckoutRequest, LoanTransformer, ReturnRequest};
use crate::response::{LoanPresenter, ReturnPresenter};
use crate::route::{reject, Flow};
use crate::terminal::Terminal;

pub fn checkout_book<R: BufRead, W: Write>(
    module: &mut Handler,
    terminal: &mut Terminal<R, W>,
) -> error_stack::Result<Flow, KernelError> {
    let Some(isbn) = terminal.prompt("Enter ISBN of the book to checkout: ")? else {
        return Ok(Flow::Exit);
    };
    let Some(borrower) = terminal.prompt("Enter borrower's name: ")? else {
        return Ok(Flow::Exit);
    };

    let now = module.clock().now();
    let transformed = match Controller::new(LoanTransformer::new(now), LoanPresenter::new(now))
        .try_intake(CheckoutRequest { isbn, borrower })
    {
        Ok(transformed) => transformed,
        Err(report) => return reject(terminal, report),
    };
    let result = transformed.try_handle(|dto| module.catalog_mut().checkout(dto));
    match result {
        Ok(lines) => terminal.print_lines(lines)?,
        Err(report) => terminal.println(ErrorNotice::from(report).into_notice()?)?,
    }
    Ok(Flow::Continue)
}

pub fn return_book<R: BufRead, W: Write>(
    module: &mut Handler,
    terminal: &mut Terminal<R, W>,
) -> error_stack::Result<Flow, KernelError> {
    let Some(isbn) = terminal.prompt("Enter ISBN of the book to return: ")? else {
        return Ok(Flow::Exit);
    };

    let now = module.clock().now();
    let transformed = match Controller::new(LoanTransformer::new(now), ReturnPresenter)
        .try_intake(ReturnRequest { isbn })
    {
        Ok(transformed) => transformed,
        Err(report) => return reject(terminal, report),
    };
    let result = transformed.handle(|dto| module.catalog_mut().return_book(dto));
    match result {
        Ok(lines) => terminal.print_lines(lines)?,
        Err(report) => terminal.println(ErrorNotice::from(report).into_notice()?)?,
    }
    Ok(Flow::Continue)
}

pub fn view_borrowers<R: BufRead, W: Write>(
    module: &mut Handler,
    terminal: &mut Terminal<R, W>,
) -> error_stack::Result<Flow, KernelError> {
    let now = module.clock().now();
    let lines = Controller::new((), LoanPresenter::new(now))
        .try_bypass(|| Ok::<_, Report<KernelError>>(module.catalog().get_all_loans()))?;
    terminal.print_lines(lines)?;
    Ok(Flow::Continue)
}
