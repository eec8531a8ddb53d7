mod book;
mod loan;

use std::io::{BufRead, Write};
use std::str::FromStr;

use error_stack::Report;
use kernel::KernelError;
use tracing::debug;

use crate::error::InputError;
use crate::handler::Handler;
use crate::terminal::Terminal;

pub use self::{book::*, loan::*};

const MENU: [&str; 9] = [
    "",
    "Library Management System",
    "1. Add Book",
    "2. Search Book",
    "3. Checkout Book",
    "4. Return Book",
    "5. View All Books",
    "6. View Borrowers",
    "7. Exit",
];

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum MenuChoice {
    AddBook,
    SearchBook,
    CheckoutBook,
    ReturnBook,
    ViewBooks,
    ViewBorrowers,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u8>() {
            Ok(1) => Ok(Self::AddBook),
            Ok(2) => Ok(Self::SearchBook),
            Ok(3) => Ok(Self::CheckoutBook),
            Ok(4) => Ok(Self::ReturnBook),
            Ok(5) => Ok(Self::ViewBooks),
            Ok(6) => Ok(Self::ViewBorrowers),
            Ok(7) => Ok(Self::Exit),
            _ => Err(format!("Unknown menu entry: {s:?}")),
        }
    }
}

/// Whether the session keeps prompting after an action.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Runs the menu until the user exits or input ends.
pub fn run<R: BufRead, W: Write>(
    module: &mut Handler,
    terminal: &mut Terminal<R, W>,
) -> error_stack::Result<(), KernelError> {
    loop {
        terminal.print_lines(MENU)?;
        let Some(line) = terminal.prompt("Enter your choice: ")? else {
            debug!("Input closed at menu");
            break;
        };
        let flow = match line.parse::<MenuChoice>() {
            Ok(choice) => {
                debug!("Menu choice: {choice:?}");
                dispatch(choice, module, terminal)?
            }
            Err(reason) => {
                debug!("{reason}");
                terminal.println("Invalid choice, please try again.")?;
                Flow::Continue
            }
        };
        if flow == Flow::Exit {
            break;
        }
    }
    terminal.println("Exiting the system...")
}

fn dispatch<R: BufRead, W: Write>(
    choice: MenuChoice,
    module: &mut Handler,
    terminal: &mut Terminal<R, W>,
) -> error_stack::Result<Flow, KernelError> {
    match choice {
        MenuChoice::AddBook => add_book(module, terminal),
        MenuChoice::SearchBook => search_book(module, terminal),
        MenuChoice::CheckoutBook => checkout_book(module, terminal),
        MenuChoice::ReturnBook => return_book(module, terminal),
        MenuChoice::ViewBooks => view_books(module, terminal),
        MenuChoice::ViewBorrowers => view_borrowers(module, terminal),
        MenuChoice::Exit => Ok(Flow::Exit),
    }
}

/// Tells the user why an answer was refused and returns to the menu.
fn reject<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    report: Report<InputError>,
) -> error_stack::Result<Flow, KernelError> {
    debug!("{report:?}");
    terminal.println(report.current_context())?;
    Ok(Flow::Continue)
}

#[cfg(test)]
mod test {
    use std::io::Cursor;

    use error_stack::Report;
    use kernel::interface::clock::Clock;
    use kernel::KernelError;
    use time::OffsetDateTime;

    use application::service::{CheckoutService, CreateBookService};
    use application::transfer::{CheckoutDto, CreateBookDto};

    use crate::handler::Handler;
    use crate::route::{run, MenuChoice};
    use crate::terminal::Terminal;

    struct FixedClock(i64);

    impl Clock for FixedClock {
        fn now(&self) -> OffsetDateTime {
            OffsetDateTime::from_unix_timestamp(self.0).unwrap()
        }
    }

    fn session(clock: i64, script: &str) -> Result<String, Report<KernelError>> {
        let mut module = Handler::init(FixedClock(clock));
        let mut terminal = Terminal::new(Cursor::new(script.to_string()), Vec::new());
        run(&mut module, &mut terminal)?;
        Ok(String::from_utf8(terminal.into_output()).unwrap())
    }

    #[test]
    fn parses_menu_numbers() {
        assert_eq!("1".parse::<MenuChoice>(), Ok(MenuChoice::AddBook));
        assert_eq!(" 4 ".parse::<MenuChoice>(), Ok(MenuChoice::ReturnBook));
        assert_eq!("07".parse::<MenuChoice>(), Ok(MenuChoice::Exit));
        assert!("0".parse::<MenuChoice>().is_err());
        assert!("8".parse::<MenuChoice>().is_err());
        assert!("two".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn exit_choice_ends_session() -> Result<(), Report<KernelError>> {
        let output = session(0, "7\n1\n")?;
        assert!(output.ends_with("Enter your choice: Exiting the system...\n"));
        assert_eq!(output.matches("Library Management System").count(), 1);
        Ok(())
    }

    #[test]
    fn invalid_choice_reprompts() -> Result<(), Report<KernelError>> {
        let output = session(0, "9\nabc\n7\n")?;
        assert_eq!(output.matches("Invalid choice, please try again.").count(), 2);
        assert_eq!(output.matches("Library Management System").count(), 3);
        Ok(())
    }

    #[test]
    fn end_of_input_exits() -> Result<(), Report<KernelError>> {
        let output = session(0, "1\nDune\n")?;
        assert!(!output.contains("Book added successfully!"));
        assert!(output.ends_with("Exiting the system...\n"));
        Ok(())
    }

    #[test]
    fn add_search_and_list() -> Result<(), Report<KernelError>> {
        let script = [
            "1",
            "Dune",
            "Frank Herbert",
            "ISBN1",
            "2",
            "Frank Herbert",
            "2",
            "Herbert",
            "5",
            "7",
        ]
        .join("\n");
        let output = session(0, &script)?;

        assert!(output.contains(
            "Enter Book Title: Enter Author Name: Enter ISBN: Book added successfully!"
        ));
        assert!(output.contains(
            "Enter search query (Title, Author, or ISBN): Book found!\nTitle: Dune, Author: Frank Herbert, ISBN: ISBN1\n"
        ));
        assert!(output.contains(
            "Enter search query (Title, Author, or ISBN): No books found matching your search query.\n"
        ));
        assert!(output.contains(
            "Books in the Library:\nTitle: Dune, Author: Frank Herbert, ISBN: ISBN1, Available: Yes\n"
        ));
        Ok(())
    }

    #[test]
    fn checkout_rejections_and_borrowers() -> Result<(), Report<KernelError>> {
        let script = [
            "1",
            "Dune",
            "Frank Herbert",
            "ISBN1",
            "3",
            "ISBN1",
            "Alice",
            "3",
            "ISBN1",
            "Bob",
            "3",
            "ISBN404",
            "Bob",
            "6",
            "5",
            "7",
        ]
        .join("\n");
        let output = session(0, &script)?;

        assert!(output.contains(
            "Enter ISBN of the book to checkout: Enter borrower's name: Book checked out successfully! Due date: Thu Jan 15 00:00:00 1970\n"
        ));
        assert_eq!(
            output
                .matches("This book is either not available or doesn't exist.")
                .count(),
            2
        );
        assert!(output.contains(
            "Current Borrowers:\nName: Alice, Borrowed Book ISBN: ISBN1, Due Date: Thu Jan 15 00:00:00 1970\n"
        ));
        assert!(output.contains("ISBN: ISBN1, Available: No"));
        Ok(())
    }

    #[test]
    fn return_flow_messages() -> Result<(), Report<KernelError>> {
        let script = [
            "1",
            "Dune",
            "Frank Herbert",
            "ISBN1",
            "4",
            "ISBN1",
            "3",
            " ISBN1 ",
            "Alice",
            "4",
            "ISBN1",
            "6",
            "7",
        ]
        .join("\n");
        let output = session(0, &script)?;

        assert!(output.contains(
            "Enter ISBN of the book to return: This book was not checked out!\n"
        ));
        assert!(output.contains(
            "Enter ISBN of the book to return: Book returned on time. No fine.\nBook returned successfully!\n"
        ));
        assert!(output.contains("Current Borrowers:\n\nLibrary Management System"));
        Ok(())
    }

    #[test]
    fn overdue_return_reports_fine() -> Result<(), Report<KernelError>> {
        let mut module = Handler::init(FixedClock(1_300_000));
        module.catalog_mut().create_book(CreateBookDto {
            title: "Dune".to_string(),
            author: "Frank Herbert".to_string(),
            isbn: "ISBN1".to_string(),
        });
        module.catalog_mut().checkout(CheckoutDto {
            isbn: "ISBN1".to_string(),
            borrower: "Alice".to_string(),
            now: OffsetDateTime::UNIX_EPOCH,
        })?;

        let mut terminal = Terminal::new(Cursor::new("6\n4\nISBN1\n5\n7\n"), Vec::new());
        run(&mut module, &mut terminal)?;
        let output = String::from_utf8(terminal.into_output()).unwrap();

        assert!(output.contains("Due Date: Thu Jan 15 00:00:00 1970 (overdue)\n"));
        assert!(output.contains(
            "The book is overdue by 1 days. Fine: $0.50\nBook returned successfully!\n"
        ));
        assert!(output.contains("ISBN: ISBN1, Available: Yes"));
        Ok(())
    }

    #[test]
    fn blank_isbn_is_refused() -> Result<(), Report<KernelError>> {
        let script = [
            "1",
            "Dune",
            "Frank Herbert",
            "   ",
            "3",
            "",
            "Alice",
            "4",
            "",
            "5",
            "7",
        ]
        .join("\n");
        let output = session(0, &script)?;

        assert!(output.contains("Enter ISBN: ISBN must not be empty.\n"));
        assert!(output.contains("Enter borrower's name: ISBN must not be empty.\n"));
        assert!(output.contains("Enter ISBN of the book to return: ISBN must not be empty.\n"));
        assert!(!output.contains("Book added successfully!"));
        assert!(output.contains("Books in the Library:\n\nLibrary Management System"));
        assert!(output.ends_with("Exiting the system...\n"));
        Ok(())
    }

    #[test]
    fn undecodable_title_keeps_session_alive() -> Result<(), Report<KernelError>> {
        let mut module = Handler::init(FixedClock(0));
        let script = b"1\nCaf\xE9\nAnon\nISBN9\n5\n7\n".to_vec();
        let mut terminal = Terminal::new(Cursor::new(script), Vec::new());
        run(&mut module, &mut terminal)?;
        let output = String::from_utf8(terminal.into_output()).unwrap();

        assert!(output.contains("Book added successfully!"));
        assert!(output.contains("Title: Caf\u{FFFD}, Author: Anon, ISBN: ISBN9, Available: Yes\n"));
        assert!(output.ends_with("Exiting the system...\n"));
        Ok(())
    }
}
