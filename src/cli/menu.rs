//! The interactive menu loop.
//!
//! Reads commands from any [`BufRead`] source, so tests can drive a session
//! from a scripted string while the binary wires up stdin.

use std::io::{self, BufRead, Write as _};

use reel::{store::Desk, CustomerId, MovieId};

use super::{render, terminal::Colorize as _};

/// An interactive session over a rental desk.
pub struct Menu<R> {
    input: R,
    graph_width: usize,
}

impl<R: BufRead> Menu<R> {
    /// Creates a session reading commands from `input`, rendering the friend
    /// graph `graph_width` columns wide.
    pub const fn new(input: R, graph_width: usize) -> Self {
        Self { input, graph_width }
    }

    /// Runs the menu loop until the user exits or the input ends.
    pub fn run(mut self, desk: &mut Desk) -> io::Result<()> {
        println!("{}", "=== Movie Rental System ===".info());

        loop {
            print_menu();
            let Some(choice) = self.read_line("Enter choice: ")? else {
                break;
            };

            match choice.as_str() {
                "1" => self.add_customer(desk)?,
                "2" => self.add_movie(desk)?,
                "3" => self.enqueue_rental(desk)?,
                "4" => Self::process_next(desk),
                "5" => Self::display_customers(desk),
                "6" => Self::display_movies(desk),
                "7" => Self::display_categories(desk),
                "8" => self.add_connection(desk)?,
                "9" => self.show_recommendations(desk)?,
                "10" => Self::undo_last(desk),
                "11" => Self::show_history(desk),
                "12" => {
                    println!("\nExiting system...");
                    break;
                }
                "13" => Self::visualize_tree(desk),
                "14" => self.visualize_graph(desk),
                _ => println!("{}", "Invalid choice".warning()),
            }
        }

        Ok(())
    }

    fn add_customer(&mut self, desk: &mut Desk) -> io::Result<()> {
        println!("\n--- Add New Customer ---");
        let Some(id) = self.read_id("Enter customer ID: ")? else {
            return Ok(());
        };
        let Some(name) = self.read_line("Enter customer name: ")? else {
            return Ok(());
        };

        let customer = desk.add_customer(CustomerId::new(id), name);
        println!("{}", format!("Customer added: {customer}").success());
        Ok(())
    }

    fn add_movie(&mut self, desk: &mut Desk) -> io::Result<()> {
        println!("\n--- Add New Movie ---");
        let Some(id) = self.read_id("Enter movie ID: ")? else {
            return Ok(());
        };
        let Some(title) = self.read_line("Enter movie title: ")? else {
            return Ok(());
        };
        let Some(genre) = self.read_line("Enter movie genre: ")? else {
            return Ok(());
        };

        let movie = desk.add_movie(MovieId::new(id), title, genre);
        println!("{}", format!("Movie added: {movie}").success());
        Ok(())
    }

    fn enqueue_rental(&mut self, desk: &mut Desk) -> io::Result<()> {
        println!("\n--- New Rental Request ---");
        let Some(customer) = self.read_id("Enter customer ID: ")? else {
            return Ok(());
        };
        let Some(movie) = self.read_id("Enter movie ID: ")? else {
            return Ok(());
        };

        desk.enqueue_rental(CustomerId::new(customer), MovieId::new(movie));
        println!("{}", "Request added to queue".success());
        Ok(())
    }

    fn process_next(desk: &mut Desk) {
        match desk.process_next() {
            Ok(record) => println!("{}", format!("Processed: {record}").success()),
            Err(err) => println!("{}", format!("Error: {err}").warning()),
        }
    }

    fn display_customers(desk: &Desk) {
        println!("\n--- Customer List ---");
        if desk.registry().is_empty() {
            println!("No customers found");
            return;
        }
        for customer in desk.customers() {
            println!("{customer}");
        }
    }

    fn display_movies(desk: &Desk) {
        println!("\n--- Movie Inventory ---");
        if desk.catalog().is_empty() {
            println!("No movies found");
            return;
        }
        for movie in desk.movies() {
            println!("{movie}");
        }
    }

    fn display_categories(desk: &Desk) {
        if desk.catalog().is_empty() {
            println!("\nNo movies in categories");
            return;
        }
        println!("\nMovies organized by genre:");
        for (genre, movies) in desk.movies_by_genre() {
            println!("  Genre: {genre}");
            for movie in movies {
                println!("    {movie}");
            }
        }
    }

    fn add_connection(&mut self, desk: &mut Desk) -> io::Result<()> {
        println!("\n--- Add Friend Connection ---");
        let Some(first) = self.read_id("Enter first customer ID: ")? else {
            return Ok(());
        };
        let Some(second) = self.read_id("Enter second customer ID: ")? else {
            return Ok(());
        };

        let (first, second) = (CustomerId::new(first), CustomerId::new(second));
        if desk.customer(first).is_none() || desk.customer(second).is_none() {
            println!("{}", "Error: One or both customers not found".warning());
            return Ok(());
        }

        desk.connect(first, second);
        println!(
            "{}",
            format!("Connection added between customers {first} and {second}").success()
        );
        Ok(())
    }

    fn show_recommendations(&mut self, desk: &mut Desk) -> io::Result<()> {
        println!("\n--- Movie Recommendations ---");
        let Some(id) = self.read_id("Enter customer ID: ")? else {
            return Ok(());
        };

        let id = CustomerId::new(id);
        match desk.recommendations_for(id) {
            Ok(titles) => {
                if let Some(customer) = desk.customer(id) {
                    println!("Recommended movies for Customer {id} ({}):", customer.name());
                }
                for title in &titles {
                    println!("  • {title}");
                }
            }
            Err(err) => println!("{}", format!("Error: {err}").warning()),
        }
        Ok(())
    }

    fn undo_last(desk: &mut Desk) {
        match desk.undo_last() {
            Ok(undone) => {
                println!("{}", format!("Undoing: {}", undone.record).info());
                if undone.restored.is_none() {
                    println!("{}", "No matching movie in the catalog".warning());
                }
            }
            Err(err) => println!("{}", format!("Error: {err}").warning()),
        }
    }

    fn show_history(desk: &Desk) {
        let mut records = desk.history().peekable();
        if records.peek().is_none() {
            println!("\nNo rental history");
            return;
        }
        println!("\n--- Rental History (Most Recent First) ---");
        for record in records {
            println!("  • {record}");
        }
    }

    fn visualize_tree(desk: &Desk) {
        println!("\n--- Movie Category Tree ---");
        print!("{}", render::category_tree(desk.genre_index(), desk.catalog()));
    }

    fn visualize_graph(&self, desk: &Desk) {
        println!("\n--- Recommendation Graph ---");
        print!(
            "{}",
            render::friend_graph(desk.friend_graph(), desk.registry(), self.graph_width)
        );
    }

    /// Prompts and reads one line, trimmed. `None` means the input ended.
    fn read_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts until the user enters an integer. `None` means the input ended.
    fn read_id(&mut self, prompt: &str) -> io::Result<Option<i64>> {
        loop {
            let Some(line) = self.read_line(prompt)? else {
                return Ok(None);
            };
            match line.parse() {
                Ok(id) => return Ok(Some(id)),
                Err(_) => println!("{}", "Invalid input. Please enter a number.".warning()),
            }
        }
    }
}

fn print_menu() {
    println!("\n===== Main Menu =====");
    println!("1. Add Customer");
    println!("2. Add Movie");
    println!("3. Enqueue Rental Request");
    println!("4. Process Next Rental");
    println!("5. Display Customers");
    println!("6. Display Movies");
    println!("7. Display Movie Categories");
    println!("8. Add Friend Connection");
    println!("9. Show Movie Recommendations");
    println!("10. Undo Last Rental");
    println!("11. View Rental History");
    println!("12. Exit System");
    println!("13. Visualize Movie Category Tree");
    println!("14. Visualize Recommendation Graph");
}
