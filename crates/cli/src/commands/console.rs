//! Interactive user-management console.
//!
//! A small line-oriented REPL over the console library: search and
//! page the user list, open a user into the tabbed detail editor, edit
//! fields, and save per tab. Master reference data loads up front with
//! join-all semantics; if any of the three datasets fails the console
//! refuses to start rather than run with partial reference data.
//!
//! Type `help` at the prompt for the command list.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use ledgerdesk_console::editor::account::{AccountField, AccountSelection};
use ledgerdesk_console::editor::assets::AssetView;
use ledgerdesk_console::editor::{EditorError, SaveOutcome, Tab, UserEditor};
use ledgerdesk_console::gateway::TransactionFilter;
use ledgerdesk_console::list::ListState;
use ledgerdesk_console::screen::{TransactionScreen, UserScreen};
use ledgerdesk_console::{
    ConfigError, ConsoleConfig, Gateway, GuardError, MasterData, MasterError, SessionStore,
    notice, require_auth,
};
use thiserror::Error;

/// Errors that end the console session.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Configuration could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// No stored admin session; log in first.
    #[error(transparent)]
    Guard(#[from] GuardError),

    /// Master reference data could not be loaded.
    #[error(transparent)]
    Master(#[from] MasterError),

    /// The terminal went away.
    #[error("failed to read input: {0}")]
    Input(#[from] io::Error),
}

/// Run the interactive console until `quit` or end of input.
pub async fn run() -> Result<(), ConsoleError> {
    let config = ConsoleConfig::from_env()?;
    let store = SessionStore::new(config.session_path.clone());
    let session = require_auth(&store)?;
    let gateway = Gateway::new(&config);

    // All-or-nothing: without the full reference cache the protected
    // area does not open.
    let master = match MasterData::load(&gateway).await {
        Ok(master) => master,
        Err(err) => {
            tracing::error!(error = %err, "master load failed");
            println!("{}", notice::FAILED_GET_MASTER_DATA);
            return Err(err.into());
        }
    };

    let (symbols, products, exchanges) = master.counts();
    println!(
        "Ledgerdesk console - {} ({})",
        session.admin_name,
        session.admin_level.label()
    );
    println!("Master data: {symbols} symbols, {products} products, {exchanges} exchanges.");

    let mut console = Console {
        gateway,
        master,
        screen: UserScreen::default(),
        transactions: TransactionScreen::default(),
        editor: None,
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("ldesk> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        if !console.dispatch(line.trim()).await {
            break;
        }
    }
    Ok(())
}

struct Console {
    gateway: Gateway,
    master: Arc<MasterData>,
    screen: UserScreen,
    transactions: TransactionScreen,
    editor: Option<UserEditor>,
}

impl Console {
    /// Handle one input line; returns false on `quit`.
    async fn dispatch(&mut self, line: &str) -> bool {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            return true;
        };
        let rest: Vec<&str> = parts.collect();

        match command {
            "quit" | "exit" => return false,
            "help" => print_help(),
            "search" => self.search(&rest.join(" ")).await,
            "next" => self.next_page().await,
            "rows" => self.print_rows(),
            "open" => match rest.first() {
                Some(uid) => self.open(uid).await,
                None => println!("usage: open <user_uid>"),
            },
            "close" => {
                // Dropping the editor discards unsaved edits.
                self.editor = None;
                println!("Editor closed.");
            }
            "tab" => match rest.first().copied().and_then(Tab::from_name) {
                Some(tab) => self.select_tab(tab).await,
                None => println!("usage: tab <profile|account|assets|agreements>"),
            },
            "set" => match rest.split_first() {
                Some((field, value)) if !value.is_empty() => {
                    self.set_field(field, &value.join(" "));
                }
                _ => println!("usage: set <field> <value>"),
            },
            "select" => match rest.first() {
                Some(code) => self.select_account(code),
                None => println!("usage: select <acnt_cd|new>"),
            },
            "view" => match rest.first().copied().and_then(AssetView::from_name) {
                Some(view) => self.set_asset_view(view).await,
                None => println!("usage: view <holdings|offers>"),
            },
            "toggle" => match rest.as_slice() {
                [code, ty] => self.toggle_agreement(code, ty).await,
                _ => println!("usage: toggle <terms_code> <terms_type>"),
            },
            "save" => self.save().await,
            "txns" => {
                let filter = TransactionFilter {
                    customer_name: rest.first().copied().unwrap_or_default().to_string(),
                    start_date: rest.get(1).copied().unwrap_or_default().to_string(),
                    end_date: rest.get(2).copied().unwrap_or_default().to_string(),
                };
                self.search_transactions(filter).await;
            }
            "show" => self.show(),
            "master" => self.master_lookup(&rest),
            other => println!("unknown command: {other} (try `help`)"),
        }
        true
    }

    async fn search(&mut self, query: &str) {
        if let Err(err) = self.screen.search(&self.gateway, query).await {
            println!("{err}");
            return;
        }
        match self.screen.list().state() {
            ListState::Error(message) => println!("{message}"),
            _ if self.screen.is_empty_result() => println!("{}", notice::NO_DATA),
            _ => self.print_rows(),
        }
    }

    async fn next_page(&mut self) {
        if let Err(err) = self.screen.load_more(&self.gateway).await {
            println!("{err}");
            return;
        }
        match self.screen.list().state() {
            ListState::Error(message) => println!("{message}"),
            _ => self.print_rows(),
        }
    }

    fn print_rows(&self) {
        let list = self.screen.list();
        if list.rows().is_empty() {
            println!("{}", notice::NO_DATA);
            return;
        }
        for user in list.rows() {
            println!(
                "{:<12} {:<16} {:<24} {:<10} {}",
                user.user_uid,
                opt(user.user_name.as_deref()),
                opt(user.user_email.as_deref()),
                user.user_used.map_or("-", |status| status.label()),
                opt(user.user_tel.as_deref()),
            );
        }
        let more = if list.can_load_more() {
            " (more available: `next`)"
        } else {
            ""
        };
        println!("{} row(s), page {}{more}", list.rows().len(), list.page());
    }

    async fn search_transactions(&mut self, filter: TransactionFilter) {
        if self
            .transactions
            .search(&self.gateway, filter)
            .await
            .is_err()
        {
            println!("{}", notice::FAILED_GET_TRANSACTIONS);
            return;
        }
        if self.transactions.rows().is_empty() {
            println!("{}", notice::NO_DATA);
            return;
        }
        for row in self.transactions.rows() {
            println!(
                "{:<6} {:<12} {:<12} {:<10} {:<16} {:>14} {}",
                row.id,
                opt(row.request_date.as_deref()),
                opt(row.process_date.as_deref()),
                opt(row.kind.as_deref()),
                opt(row.account_number.as_deref()),
                row.amount
                    .map_or_else(|| "-".to_string(), |amount| amount.to_string()),
                opt(row.status.as_deref()),
            );
        }
        println!("{} transaction(s)", self.transactions.rows().len());
    }

    async fn open(&mut self, uid: &str) {
        let Some(user) = self.screen.list().select(uid).cloned() else {
            println!("no such row: {uid}");
            return;
        };
        let mut editor = UserEditor::open(user);
        // Pre-fetch the account and agreement panes so the first tab
        // switch shows data immediately; a failure here is a notice,
        // not a blocker.
        if let Err(err) = editor.select_tab(&self.gateway, Tab::Account).await {
            tracing::warn!(error = %err, "account prefetch failed");
            println!("{}", notice::FAILED_GET_USER_ACCOUNT);
        }
        if let Err(err) = editor.select_tab(&self.gateway, Tab::Agreements).await {
            tracing::warn!(error = %err, "agreements prefetch failed");
            println!("{}", notice::FAILED_GET_USER_AGREEMENTS);
        }
        if let Err(err) = editor.select_tab(&self.gateway, Tab::Profile).await {
            tracing::warn!(error = %err, "profile tab reset failed");
        }
        println!(
            "Editing {} ({})",
            opt(editor.user().user_name.as_deref()),
            editor.user().user_uid
        );
        self.editor = Some(editor);
        self.show();
    }

    async fn select_tab(&mut self, tab: Tab) {
        let Some(editor) = self.editor.as_mut() else {
            println!("no user open (use `open <user_uid>`)");
            return;
        };
        if let Err(err) = editor.select_tab(&self.gateway, tab).await {
            println!("{}", fetch_notice(tab, editor.assets().view(), &err));
        }
        self.show();
    }

    fn set_field(&mut self, field: &str, value: &str) {
        let Some(editor) = self.editor.as_mut() else {
            println!("no user open (use `open <user_uid>`)");
            return;
        };
        let result = match editor.tab() {
            Tab::Profile => editor.set_profile_field(field, value),
            Tab::Account => match AccountField::from_name(field) {
                Some(field) => editor.set_account_field(field, value),
                None => Err(EditorError::UnknownField(field.to_string())),
            },
            Tab::Assets | Tab::Agreements => Err(EditorError::ReadOnlyTab),
        };
        if let Err(err) = result {
            println!("{err}");
        }
    }

    fn select_account(&mut self, code: &str) {
        let Some(editor) = self.editor.as_mut() else {
            println!("no user open (use `open <user_uid>`)");
            return;
        };
        let selection = if code == "new" {
            AccountSelection::New
        } else {
            AccountSelection::Existing(code.to_string())
        };
        if let Err(err) = editor.select_account(selection) {
            println!("{err}");
        }
    }

    async fn set_asset_view(&mut self, view: AssetView) {
        let Some(editor) = self.editor.as_mut() else {
            println!("no user open (use `open <user_uid>`)");
            return;
        };
        if let Err(err) = editor.set_asset_view(&self.gateway, view).await {
            println!("{}", fetch_notice(Tab::Assets, view, &err));
        }
        self.show();
    }

    async fn toggle_agreement(&mut self, code: &str, ty: &str) {
        let Some(editor) = self.editor.as_mut() else {
            println!("no user open (use `open <user_uid>`)");
            return;
        };
        match editor.toggle_agreement(&self.gateway, code, ty).await {
            Ok(_) => println!("{}", notice::UPDATED_USER_AGREEMENT),
            Err(err) => println!("{err}"),
        }
    }

    async fn save(&mut self) {
        let Some(editor) = self.editor.as_mut() else {
            println!("no user open (use `open <user_uid>`)");
            return;
        };
        match editor.save(&self.gateway).await {
            Ok(SaveOutcome::ProfileSaved(record)) => {
                // Patch the list's cached row so the table reflects the
                // edit without a refetch.
                self.screen.patch_row(record);
                println!("{}", notice::UPDATED_USER_INFORMATION);
            }
            Ok(SaveOutcome::AccountRegistered) => {
                println!("{}", notice::REGISTERED_USER_ACCOUNT);
            }
            Ok(SaveOutcome::AccountUpdated) => println!("{}", notice::UPDATED_USER_ACCOUNT),
            Ok(SaveOutcome::NoChanges) => println!("{}", notice::NO_CHANGES),
            Err(err) => println!("{err}"),
        }
    }

    fn show(&self) {
        let Some(editor) = self.editor.as_ref() else {
            println!("no user open (use `open <user_uid>`)");
            return;
        };
        match editor.tab() {
            Tab::Profile => {
                let user = editor.profile().edited();
                println!("[Profile] {}", editor.user().user_uid);
                println!("  user_name:  {}", opt(user.user_name.as_deref()));
                println!("  user_birth: {}", opt(user.user_birth.as_deref()));
                println!("  user_tel:   {}", opt(user.user_tel.as_deref()));
                println!("  user_email: {}", opt(user.user_email.as_deref()));
                println!(
                    "  user_used:  {}",
                    user.user_used.map_or("-", |status| status.label())
                );
                println!(
                    "  tend_grade: {}",
                    user.tend_grade.map_or("-", |grade| grade.label())
                );
                println!("  tend_date:  {}", opt(user.tend_date.as_deref()));
                println!(
                    "  qual_grade: {}",
                    user.qual_grade.map_or("-", |grade| grade.label())
                );
                println!("  rtime:      {}", opt(user.rtime.as_deref()));
                if editor.profile().is_dirty() {
                    println!("  (unsaved changes)");
                }
            }
            Tab::Account => {
                let pane = editor.account();
                println!("[Account] {} account(s)", pane.accounts().len());
                for account in pane.accounts() {
                    println!(
                        "  {:<10} bank {:<6} linked {}",
                        account.acnt_cd,
                        opt(account.bank_code.as_deref()),
                        opt(account.acnt_linked.as_deref()),
                    );
                }
                let selected = match pane.selection() {
                    AccountSelection::New => "(new account)".to_string(),
                    AccountSelection::Existing(code) => code.clone(),
                };
                let draft = pane.draft().edited();
                println!("  editing: {selected}");
                println!("  bank_code:   {}", opt(draft.bank_code.as_deref()));
                println!("  acnt_linked: {}", opt(draft.acnt_linked.as_deref()));
                println!(
                    "  deposit_amt: {}",
                    draft
                        .deposit_amt
                        .map_or_else(|| "-".to_string(), |amount| amount.to_string())
                );
                println!(
                    "  qual_limit:  {}",
                    draft
                        .qual_limit
                        .map_or_else(|| "-".to_string(), |amount| amount.to_string())
                );
                if pane.is_invalid() {
                    println!("  bank code, linked account number, and limit are all required");
                }
            }
            Tab::Assets => {
                let pane = editor.assets();
                match pane.view() {
                    AssetView::Holdings => {
                        println!("[Assets: holdings] {} row(s)", pane.holdings().len());
                        for row in pane.holdings() {
                            println!(
                                "  {:<10} {:<20} qty {}",
                                opt(row.symbol_code.as_deref()),
                                opt(row.symbol_name.as_deref()),
                                row.trade_pos_qty
                                    .map_or_else(|| "-".to_string(), |qty| qty.to_string()),
                            );
                        }
                    }
                    AssetView::Offers => {
                        println!("[Assets: offers] {} row(s)", pane.offers().len());
                        for row in pane.offers() {
                            println!(
                                "  {:<10} {:<20} qty {} ({})",
                                opt(row.ticker_code.as_deref()),
                                opt(row.offer_name.as_deref()),
                                row.offer_quantity
                                    .map_or_else(|| "-".to_string(), |qty| qty.to_string()),
                                opt(row.offer_used.as_deref()),
                            );
                        }
                    }
                }
            }
            Tab::Agreements => {
                let pane = editor.agreements();
                println!("[Agreements] {} row(s)", pane.rows().len());
                for row in pane.rows() {
                    let lock = if row.terms_required.is_yes() {
                        " (required)"
                    } else {
                        ""
                    };
                    println!(
                        "  {:<8} type {:<3} agree {}{}  {} [{}]",
                        row.terms_code,
                        row.terms_type,
                        row.terms_agree.code(),
                        lock,
                        opt(row.terms_name.as_deref()),
                        opt(row.display_file()),
                    );
                }
            }
        }
    }

    fn master_lookup(&self, args: &[&str]) {
        match args {
            ["symbol", exchange, code] => match self.master.symbol(exchange, code) {
                Some(row) => println!(
                    "{} = {} (product {})",
                    row.key(),
                    opt(row.symbol_name.as_deref()),
                    opt(row.product_code.as_deref()),
                ),
                None => println!("no such symbol: {exchange}.{code}"),
            },
            ["product", code] => match self.master.product(code) {
                Some(row) => println!(
                    "{} = {}",
                    row.product_code,
                    opt(row.product_name.as_deref())
                ),
                None => println!("no such product: {code}"),
            },
            ["exchange", code] => match self.master.exchange(code) {
                Some(row) => println!(
                    "{} = {}",
                    row.exchange_code,
                    opt(row.exchange_name.as_deref())
                ),
                None => println!("no such exchange: {code}"),
            },
            _ => println!("usage: master <symbol <exchange> <code> | product <code> | exchange <code>>"),
        }
    }
}

fn fetch_notice(tab: Tab, view: AssetView, err: &EditorError) -> &'static str {
    match (tab, view, err) {
        (_, _, EditorError::Busy) => "another operation is still in progress",
        (Tab::Account, _, _) => notice::FAILED_GET_USER_ACCOUNT,
        (Tab::Assets, AssetView::Holdings, _) => notice::FAILED_GET_USER_HOLDINGS,
        (Tab::Assets, AssetView::Offers, _) => notice::FAILED_GET_USER_OFFERS,
        (Tab::Agreements, _, _) => notice::FAILED_GET_USER_AGREEMENTS,
        (Tab::Profile, _, _) => notice::FAILED_GET_USERS,
    }
}

fn opt(value: Option<&str>) -> &str {
    value.unwrap_or("-")
}

fn print_help() {
    println!("commands:");
    println!("  search <word>          search users by name/id");
    println!("  next                   fetch the next page");
    println!("  rows                   reprint the current list");
    println!("  open <user_uid>        open a user in the detail editor");
    println!("  tab <name>             switch tab (profile|account|assets|agreements)");
    println!("  show                   reprint the active tab");
    println!("  set <field> <value>    edit a field on the active tab");
    println!("  select <acnt_cd|new>   choose the account to edit");
    println!("  view <holdings|offers> switch the assets view");
    println!("  toggle <code> <type>   toggle an agreement");
    println!("  save                   save the active tab");
    println!("  close                  close the editor (discards edits)");
    println!("  txns [name] [from] [to] list deposit/withdraw transactions");
    println!("  master ...             look up reference data");
    println!("  quit                   leave the console");
}
