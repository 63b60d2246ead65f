use crate::browser::{BannerReporter, ProfileBrowser};
use crate::card::Card;
use crate::cli::{BrowseArgs, LoadArgs, ShowArgs};
use crate::config::ViewerConfig;
use crate::error::Result;
use crate::store::{FileStore, Store, USERS_DATA_KEY};
use crate::tui::{self, Viewer};
use std::io::Write;

pub fn browse(store: FileStore, config: ViewerConfig, args: BrowseArgs) -> Result<()> {
    let mut browser = ProfileBrowser::with_reporter(store, BannerReporter::default());
    browser.restore_from_store();
    let mut viewer = Viewer::new(browser, config);
    if let Some(file) = args.file {
        viewer.open(file);
    }
    tui::run(&mut viewer)
}

pub fn load(store: FileStore, args: LoadArgs) -> Result<()> {
    let mut browser = ProfileBrowser::new(store);
    let count = browser.try_load_from_file(&args.file)?;
    println!(
        "Loaded {count} profiles from {} into {}",
        args.file.display(),
        browser.store().dir().display()
    );
    Ok(())
}

pub fn show<W: Write>(
    store: impl Store,
    config: &ViewerConfig,
    args: ShowArgs,
    out: &mut W,
) -> Result<()> {
    let locale = &config.locale;
    let mut browser = ProfileBrowser::new(store);
    browser.restore_from_store();

    writeln!(out, "{}", locale.title)?;
    if browser.dataset().is_empty() {
        writeln!(out, "{}", locale.start_prompt)?;
        return Ok(());
    }

    if args.hide_verified {
        if config.filtering {
            browser.toggle_verified();
        } else {
            log::warn!("verified filter is disabled, ignoring --hide-verified");
        }
    }
    if config.filtering {
        writeln!(out, "{}", locale.toggle_label(browser.state().show_verified))?;
    }
    if browser.total_pages() == 0 {
        return Ok(());
    }
    browser.go_to_page(args.page)?;

    let view = browser.view();
    for user in &view.users {
        writeln!(out)?;
        for line in Card::new(user, config).text_lines() {
            writeln!(out, "  {line}")?;
        }
    }
    writeln!(out)?;

    let mut footer = Vec::new();
    if view.has_prev() {
        footer.push(format!("[{}]", locale.prev));
    }
    footer.push(locale.page_status(
        view.current_page,
        view.total_pages,
        browser.state().total_users,
    ));
    if view.has_next() {
        footer.push(format!("[{}]", locale.next));
    }
    writeln!(out, "{}", footer.join("  "))?;
    Ok(())
}

pub fn clear(mut store: FileStore) -> Result<()> {
    if store.remove(USERS_DATA_KEY)? {
        println!("Stored profiles removed from {}", store.dir().display());
    } else {
        println!("Nothing stored in {}", store.dir().display());
    }
    Ok(())
}
