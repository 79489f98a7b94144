use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use chrono::{NaiveDate, NaiveTime, Utc};
use clap::{Parser, Subcommand, ValueEnum};

use chicken_nation::api::ApiError;
use chicken_nation::app::{App, AppError};
use chicken_nation::config::{Config, ConfigStore};
use chicken_nation::format::{format_date, format_long_date, format_phone, format_price, format_relative, format_time};
use chicken_nation::model::{NewAddress, OrderType, PaymentMethod, Reservation, TableType};
use chicken_nation::search::{group_by_category, SearchQuery, SortOrder};
use chicken_nation::state::notifications::{sample_feed, NotificationsIntent};
use chicken_nation::state::order_flow::OrderFlowIntent;

#[derive(Parser, Debug)]
#[command(name = "chicken-nation", version, about = "Chicken Nation ordering client")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Override the API base URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Request a one-time code by SMS
    Login {
        #[arg(long)]
        phone: Option<String>,
    },
    /// Verify the code and save the session
    Verify {
        #[arg(long)]
        phone: String,
        #[arg(long)]
        code: String,
    },
    Logout,
    /// Show the signed-in customer
    Whoami,
    /// Search the menu
    Dishes {
        #[arg(long, short)]
        query: Option<String>,
        #[arg(long)]
        max_price: Option<u64>,
        #[arg(long, value_enum, default_value_t = SortArg::Relevance)]
        sort: SortArg,
        #[arg(long)]
        category: Option<String>,
        /// Group results by category
        #[arg(long)]
        grouped: bool,
    },
    /// Recent searches
    History {
        #[arg(long)]
        clear: bool,
    },
    /// List outlets, nearest first when a position is given
    Restaurants {
        #[arg(long, allow_hyphen_values = true, requires = "lon")]
        lat: Option<f64>,
        #[arg(long, allow_hyphen_values = true, requires = "lat")]
        lon: Option<f64>,
    },
    /// Show one outlet and its menu
    Restaurant { id: String },
    #[command(subcommand)]
    Addresses(AddressCommand),
    #[command(subcommand)]
    Favorites(FavoriteCommand),
    /// Order history
    Orders,
    /// Show one order
    Order { id: String },
    /// Cancel a pending order
    Cancel { id: String },
    Loyalty,
    Notifications,
    /// Print the effective configuration
    Config,
    /// Reverse-geocode coordinates
    Locate {
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    /// Build a cart and place an order
    Checkout(CheckoutArgs),
}

#[derive(Subcommand, Debug)]
enum AddressCommand {
    List,
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        street: Option<String>,
        #[arg(long)]
        city: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
    },
    Remove { id: String },
}

#[derive(Subcommand, Debug)]
enum FavoriteCommand {
    List,
    Add { dish_id: String },
    Remove { dish_id: String },
}

#[derive(clap::Args, Debug)]
struct CheckoutArgs {
    /// Dish to order as ID or ID:QTY, repeatable; quantities of a repeated ID add up
    #[arg(long = "item", required = true)]
    items: Vec<String>,
    /// Supplement ids applied to every item
    #[arg(long = "supplement")]
    supplements: Vec<String>,
    #[arg(long = "type", value_enum, default_value_t = TypeArg::Delivery)]
    order_type: TypeArg,
    #[arg(long)]
    address: Option<String>,
    #[arg(long)]
    restaurant: Option<String>,
    /// Reservation date (YYYY-MM-DD)
    #[arg(long)]
    date: Option<NaiveDate>,
    /// Reservation time (HH:MM)
    #[arg(long)]
    time: Option<String>,
    #[arg(long, default_value_t = 2)]
    people: u8,
    #[arg(long, value_enum, default_value_t = TableArg::Standard)]
    table: TableArg,
    #[arg(long, value_enum, default_value_t = PayArg::Cash)]
    pay: PayArg,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum SortArg {
    Relevance,
    PriceAsc,
    PriceDesc,
    Rating,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TypeArg {
    Delivery,
    Pickup,
    Table,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TableArg {
    Standard,
    Vip,
    Terrace,
    Private,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PayArg {
    Cash,
    MobileMoney,
    Card,
}

impl From<SortArg> for SortOrder {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::Relevance => SortOrder::Relevance,
            SortArg::PriceAsc => SortOrder::PriceAsc,
            SortArg::PriceDesc => SortOrder::PriceDesc,
            SortArg::Rating => SortOrder::RatingDesc,
        }
    }
}

impl From<TypeArg> for OrderType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Delivery => OrderType::Delivery,
            TypeArg::Pickup => OrderType::Pickup,
            TypeArg::Table => OrderType::Table,
        }
    }
}

impl From<TableArg> for TableType {
    fn from(arg: TableArg) -> Self {
        match arg {
            TableArg::Standard => TableType::Standard,
            TableArg::Vip => TableType::Vip,
            TableArg::Terrace => TableType::Terrace,
            TableArg::Private => TableType::Private,
        }
    }
}

impl From<PayArg> for PaymentMethod {
    fn from(arg: PayArg) -> Self {
        match arg {
            PayArg::Cash => PaymentMethod::Cash,
            PayArg::MobileMoney => PaymentMethod::MobileMoney,
            PayArg::Card => PaymentMethod::Card,
        }
    }
}

/// Split `ID[:QTY]`; quantity defaults to 1.
fn parse_item(spec: &str) -> Result<(String, u32)> {
    match spec.split_once(':') {
        Some((id, qty)) => {
            let qty: u32 = qty
                .parse()
                .with_context(|| format!("Invalid quantity in '{}'", spec))?;
            if id.is_empty() || qty == 0 {
                bail!("Invalid item '{}'", spec);
            }
            Ok((id.to_string(), qty))
        }
        None if !spec.is_empty() => Ok((spec.to_string(), 1)),
        None => bail!("Empty item"),
    }
}

/// Parse every `--item` and add up quantities of repeated ids, keeping first-seen order.
fn merge_items(specs: &[String]) -> Result<Vec<(String, u32)>> {
    let mut merged: Vec<(String, u32)> = Vec::new();
    for spec in specs {
        let (id, qty) = parse_item(spec)?;
        match merged.iter_mut().find(|(seen, _)| *seen == id) {
            Some((_, total)) => *total = total.saturating_add(qty),
            None => merged.push((id, qty)),
        }
    }
    Ok(merged)
}

fn parse_time(raw: &str) -> Result<NaiveTime> {
    NaiveTime::parse_from_str(raw, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%Hh%M"))
        .with_context(|| format!("Invalid time '{}', expected HH:MM", raw))
}

fn load_config(cli: &Cli) -> Result<ConfigStore> {
    let (config, path) = match &cli.config {
        Some(path) => (Config::load_from(path)?, path.clone()),
        None => (Config::load()?, Config::config_path()),
    };
    let store = ConfigStore::new(config, path);
    if let Some(url) = &cli.api_url {
        store.update(|c| c.api.base_url = url.clone())?;
    }
    Ok(store)
}

/// Backend failure behind `err`, whether raised through `App` or `ApiClient`.
fn api_error(err: &anyhow::Error) -> Option<&ApiError> {
    match err.downcast_ref::<AppError>() {
        Some(AppError::Api(api)) => Some(api),
        _ => err.downcast_ref::<ApiError>(),
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    chicken_nation::logging::init_tracing();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match api_error(&err) {
                Some(api) => {
                    eprintln!("Error: {}", api.user_message());
                    tracing::error!(error = %api, "Command failed");
                }
                None => eprintln!("Error: {:#}", err),
            }
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(&cli)?;
    let app = App::bootstrap(config)?;

    match cli.command {
        Command::Login { phone } => {
            let phone = match phone {
                Some(p) => p,
                None => app
                    .last_phone()?
                    .context("No saved phone number, pass --phone")?,
            };
            let phone = app.request_otp(&phone).await?;
            println!("Code envoyé au {}", format_phone(&phone)?);
        }
        Command::Verify { phone, code } => {
            let session = app.verify_otp(&phone, &code).await?;
            println!("Connecté ({})", format_phone(&session.phone)?);
        }
        Command::Logout => {
            app.logout().await?;
            println!("Déconnecté");
        }
        Command::Whoami => match app.state().session() {
            Some(session) => println!("{} (id {})", format_phone(&session.phone)?, session.user_id),
            None => println!("Non connecté"),
        },
        Command::Dishes {
            query,
            max_price,
            sort,
            category,
            grouped,
        } => {
            let query = SearchQuery {
                text: query.unwrap_or_default(),
                max_price,
                sort: sort.into(),
                category,
            };
            let dishes = app.search_dishes(&query).await?;
            if dishes.is_empty() {
                println!("Aucun plat trouvé");
            } else if grouped {
                for (category, items) in group_by_category(&dishes) {
                    println!("== {}", category);
                    for dish in items {
                        println!("  {:<12} {:<32} {:>14}", dish.id, dish.name, format_price(dish.effective_price()));
                    }
                }
            } else {
                for dish in &dishes {
                    let promo = if dish.is_on_promotion() {
                        format!(" (au lieu de {})", format_price(dish.price))
                    } else {
                        String::new()
                    };
                    println!(
                        "{:<12} {:<32} {:>14}{}  ★ {:.1}",
                        dish.id,
                        dish.name,
                        format_price(dish.effective_price()),
                        promo,
                        dish.rating
                    );
                }
            }
        }
        Command::History { clear } => {
            if clear {
                app.search_history().clear()?;
                println!("Historique effacé");
            } else {
                for entry in app.search_history().load()? {
                    println!("{}", entry);
                }
            }
        }
        Command::Restaurants { lat, lon } => {
            let restaurants = app.api().get_restaurants().await?;
            let mut rows: Vec<_> = restaurants
                .iter()
                .map(|r| {
                    let distance = lat.zip(lon).and_then(|(la, lo)| r.distance_km(la, lo));
                    (r, distance)
                })
                .collect();
            if lat.is_some() {
                rows.sort_by(|a, b| match (a.1, b.1) {
                    (Some(x), Some(y)) => x.total_cmp(&y),
                    (Some(_), None) => std::cmp::Ordering::Less,
                    (None, Some(_)) => std::cmp::Ordering::Greater,
                    (None, None) => std::cmp::Ordering::Equal,
                });
            }
            for (r, distance) in rows {
                let status = if r.active { "ouvert" } else { "fermé" };
                let distance = distance.map(|d| format!("{:.1} km", d)).unwrap_or_default();
                println!("{:<12} {:<28} {:<8} {:>9}  {}", r.id, r.name, status, distance, r.address);
            }
        }
        Command::Restaurant { id } => {
            let r = app.api().get_restaurant(&id).await?;
            println!("{} - {}", r.name, r.address);
            if let Some(hours) = &r.opening_hours {
                println!("Horaires: {}", hours);
            }
            if let Some(phone) = &r.phone {
                println!("Tél: {}", phone);
            }
            let modes: Vec<&str> = [
                (r.delivery_available, OrderType::Delivery.label()),
                (r.pickup_available, OrderType::Pickup.label()),
                (r.table_available, OrderType::Table.label()),
            ]
            .into_iter()
            .filter_map(|(on, label)| on.then_some(label))
            .collect();
            println!("{}", modes.join(" · "));
            for dish in app.api().get_restaurant_menu(&id).await? {
                println!("  {:<12} {:<32} {:>14}", dish.id, dish.name, format_price(dish.effective_price()));
            }
        }
        Command::Addresses(cmd) => {
            let session = app.require_session()?;
            match cmd {
                AddressCommand::List => {
                    for a in app.api().get_user_addresses(&session.user_id).await? {
                        println!("{:<12} {:<16} {} ({:.5}, {:.5})", a.id, a.title, a.address, a.latitude, a.longitude);
                    }
                }
                AddressCommand::Add {
                    title,
                    address,
                    street,
                    city,
                    lat,
                    lon,
                } => {
                    let new = NewAddress {
                        title,
                        address,
                        street,
                        city,
                        latitude: lat,
                        longitude: lon,
                    };
                    let created = app.api().add_address(&session.user_id, &new).await?;
                    println!("Adresse ajoutée: {}", created.id);
                }
                AddressCommand::Remove { id } => {
                    app.api().delete_address(&session.user_id, &id).await?;
                    println!("Adresse supprimée");
                }
            }
        }
        Command::Favorites(cmd) => {
            let session = app.require_session()?;
            match cmd {
                FavoriteCommand::List => {
                    for f in app.api().get_favorites(&session.user_id).await? {
                        let name = f.dish.as_ref().map(|d| d.name.as_str()).unwrap_or("");
                        println!("{:<12} {}", f.dish_id, name);
                    }
                }
                FavoriteCommand::Add { dish_id } => {
                    app.api().add_to_favorites(&session.user_id, &dish_id).await?;
                    println!("Ajouté aux favoris");
                }
                FavoriteCommand::Remove { dish_id } => {
                    app.api()
                        .remove_from_favorites(&session.user_id, &dish_id)
                        .await?;
                    println!("Retiré des favoris");
                }
            }
        }
        Command::Orders => {
            let session = app.require_session()?;
            for o in app.api().get_user_orders(&session.user_id).await? {
                let marker = if o.status.is_final() { " " } else { "•" };
                println!(
                    "{} {:<12} {:<10} {:<22} {:<16} {:>14}",
                    marker,
                    o.id,
                    format_date(o.created_at.date_naive()),
                    o.order_type.label(),
                    o.status.label(),
                    format_price(o.total)
                );
            }
        }
        Command::Order { id } => {
            app.require_session()?;
            let o = app.api().get_order(&id).await?;
            println!("Commande {} - {}", o.reference.as_deref().unwrap_or(&o.id), o.status.label());
            println!("{}", o.order_type.label());
            for line in &o.items {
                println!("  {} x {:<28} {:>14}", line.quantity, line.name, format_price(line.unit_price));
            }
            if let Some(fee) = o.delivery_fee {
                println!("  Livraison {:>36}", format_price(fee));
            }
            if let Some(r) = &o.reservation {
                println!("  Table pour {} le {} à {}", r.people, format_long_date(r.date), format_time(r.time));
            }
            println!("Total: {}", format_price(o.total));
        }
        Command::Cancel { id } => {
            app.require_session()?;
            let current = app.api().get_order(&id).await?;
            if !current.status.is_cancellable() {
                bail!("La commande {} ne peut plus être annulée ({})", id, current.status.label());
            }
            let o = app.api().cancel_order(&id).await?;
            println!("Commande {} - {}", o.id, o.status.label());
        }
        Command::Loyalty => {
            let session = app.require_session()?;
            let account = app.api().get_loyalty(&session.user_id).await?;
            println!("{} points - niveau {}", account.points, account.tier.label());
            if let Some(missing) = account.points_to_next_tier {
                println!("Encore {} points pour le niveau suivant", missing);
            }
        }
        Command::Notifications => {
            let now = Utc::now();
            app.state()
                .notifications
                .dispatch(NotificationsIntent::Load(sample_feed(now)));
            let feed = app.state().notifications.get();
            println!("{} non lue(s)", feed.unread_count());
            for n in feed.items() {
                let marker = if n.read { " " } else { "•" };
                println!("{} [{}] {} - {} ({})", marker, n.kind.tag(), n.title, n.message, format_relative(now, n.created_at));
            }
        }
        Command::Config => {
            println!("# {}", app.config().path().display());
            print!("{}", toml::to_string_pretty(&app.config().get())?);
        }
        Command::Locate { lat, lon } => {
            app.locate(lat, lon).await?;
            if let Some(location) = app.state().order_flow.get().location {
                println!("{}", location.formatted_address);
            }
        }
        Command::Checkout(args) => checkout(&app, args).await?,
    }

    Ok(())
}

async fn checkout(app: &App, args: CheckoutArgs) -> Result<()> {
    app.require_session()?;

    for (id, qty) in merge_items(&args.items)? {
        let item = app.add_to_cart(&id, qty, &args.supplements).await?;
        println!("+ {} x {} ({})", item.quantity, item.name, format_price(item.line_total()));
    }

    let flow = &app.state().order_flow;
    match OrderType::from(args.order_type) {
        OrderType::Delivery => {
            flow.dispatch(OrderFlowIntent::StartDelivery);
            if let Some(address) = args.address {
                flow.dispatch(OrderFlowIntent::SelectAddress { id: address });
            }
        }
        OrderType::Pickup => {
            flow.dispatch(OrderFlowIntent::SetActiveType(OrderType::Pickup));
        }
        OrderType::Table => {
            flow.dispatch(OrderFlowIntent::StartReservation);
            let date = args.date.context("--date is required for table orders")?;
            let time = parse_time(args.time.as_deref().context("--time is required for table orders")?)?;
            flow.dispatch(OrderFlowIntent::UpdateReservation(Reservation {
                date,
                time,
                people: args.people,
                table_type: args.table.into(),
            }));
        }
    }
    if let Some(restaurant) = args.restaurant {
        flow.dispatch(OrderFlowIntent::SelectRestaurant { id: restaurant });
    }

    let cart = app.state().cart.get();
    if cart.total_discount() > 0 {
        println!("Réduction: {}", format_price(cart.total_discount()));
    }
    println!("Total: {}", format_price(cart.total()));

    let (order, payment) = app.checkout(args.pay.into()).await?;
    println!("Commande {} créée ({})", order.id, order.status.label());
    if let Some(url) = payment.redirect_url {
        println!("Finalisez le paiement: {}", url);
    }
    Ok(())
}
