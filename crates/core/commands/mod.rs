use std::path::PathBuf;

use crate::{app, file, handoff};

use bookworm::{compose_email, Config, CoverSize, ReviewDraft, DEFAULT_MAX_QUOTES};

use clap::Subcommand;
use eyre::eyre;
use log::{info, trace};

#[derive(Subcommand)]
#[non_exhaustive]
pub enum Commands {
    /// Search the book catalog by title or author
    #[clap(arg_required_else_help = true)]
    Search {
        /// Words to search for
        #[clap(required = true)]
        query: Vec<String>,
    },

    /// Extract quotes from the quote page
    ///
    /// When the quote page cannot be reached a fixed set of sample quotes is shown instead.
    Quotes {
        /// The most quotes to show
        #[clap(short, long, default_value_t = DEFAULT_MAX_QUOTES)]
        max: usize,
    },

    /// Compose the newsletter email
    ///
    /// The review is read from a JSON draft file, or filled in with prompts when the `interact`
    /// flag is set using `-i` or `--interact`. With both, the draft file provides the starting
    /// values for the prompts.
    Compose {
        /// JSON file holding the review, using the camelCase field names (bookTitle, rating, ..)
        #[clap(short, long, parse(from_os_str))]
        draft: Option<PathBuf>,

        /// Copy the full email, including the subject line, to the clipboard
        #[clap(short, long)]
        copy: bool,

        /// Print the mailto link instead of the email text
        #[clap(long)]
        mailto: bool,

        /// Open the email in the default mail client
        #[clap(short, long)]
        open: bool,
    },
}

impl Commands {
    pub fn execute(self, config: &Config, interact: bool) -> eyre::Result<String> {
        match self {
            Commands::Search { query } => Ok(search(&query.join(" "), config)),
            Commands::Quotes { max } => {
                let quotes = bookworm::fetch_quotes(config, max);
                if quotes.is_empty() {
                    Ok("No quotes found on the quote page".to_owned())
                } else {
                    Ok(numbered(quotes.iter()))
                }
            }
            Commands::Compose {
                draft,
                copy,
                mailto,
                open,
            } => {
                let draft = match (draft, interact) {
                    (Some(path), interact) => {
                        let draft = file::read_draft(&path)?;
                        if interact {
                            app::user_fill_draft(draft, config)?
                        } else {
                            draft
                        }
                    }
                    (None, true) => app::user_fill_draft(ReviewDraft::default(), config)?,
                    (None, false) => {
                        return Err(eyre!(
                            "No draft to compose - use --draft <FILE> or fill one in with --interact"
                        ))
                    }
                };

                trace!("Rendering email for '{}'", draft.book_title);
                let email = compose_email(&draft);

                if copy {
                    handoff::copy_to_clipboard(&email.full_text)?;
                    info!("Email copied to clipboard");
                }

                if open {
                    handoff::open_mail_client(&email)?;
                    info!("Email opened in the mail client");
                }

                if mailto {
                    Ok(email.mailto_uri())
                } else {
                    Ok(email.full_text)
                }
            }
        }
    }
}

fn search(query: &str, config: &Config) -> String {
    let books = bookworm::search_books(query, config);
    if books.is_empty() {
        return format!("No books found for '{query}'");
    }

    let mut lines = Vec::new();
    for (i, book) in books.iter().enumerate() {
        lines.push(format!("{}. {book}", i + 1));
        if let Some(publisher) = book.publishers.first() {
            lines.push(format!("   Publisher: {publisher}"));
        }
        if let Some(isbn) = book.isbns.first() {
            lines.push(format!("   ISBN: {isbn}"));
        }
        if let Some(cover) = book.cover_url(CoverSize::Medium) {
            lines.push(format!("   Cover: {cover}"));
        }
    }
    lines.join("\n")
}

fn numbered<S: std::fmt::Display>(items: impl Iterator<Item = S>) -> String {
    items
        .enumerate()
        .map(|(i, item)| format!("{}. {item}", i + 1))
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[test]
fn quotes_are_numbered_from_one() {
    let quotes = ["First quote", "Second quote"];

    assert_eq!("1. First quote\n\n2. Second quote", numbered(quotes.iter()));
}
