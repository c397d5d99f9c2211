use agritech_blog::core::{resolve_post, BlogError, Engine, Listing};
use agritech_blog::forms::{ContactForm, Notification, NotificationKind};
use agritech_blog::seo;
use anyhow::{bail, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// 指定站点目录
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 查询文章列表
    List(ListArgs),

    /// 显示单篇文章及其 SEO 信息
    Show(ShowArgs),

    /// 生成静态文件
    Generate,

    /// 启动本地预览服务器
    Server(ServerArgs),

    /// 清理生成的文件
    Clean,

    /// 提交联系表单（模拟）
    Contact(ContactArgs),

    /// 订阅邮件简报（模拟）
    Subscribe(SubscribeArgs),
}

#[derive(Args)]
pub struct ListArgs {
    /// 分类ID，或 all
    #[arg(short, long, default_value = "all")]
    pub category: String,

    /// 搜索词
    #[arg(short, long)]
    pub search: Option<String>,

    /// 点击 "加载更多" 的次数
    #[arg(short, long, default_value_t = 0)]
    pub more: usize,

    /// 以 JSON 格式输出
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// 文章页面路径或URL，例如 /blogs/3.html
    pub location: String,
}

#[derive(Args)]
pub struct ServerArgs {
    /// 服务器端口
    #[arg(short, long, default_value = "4000")]
    pub port: u16,
}

#[derive(Args)]
pub struct ContactArgs {
    #[arg(long, default_value = "")]
    pub name: String,

    #[arg(long, default_value = "")]
    pub email: String,

    /// 咨询的服务
    #[arg(long, default_value = "")]
    pub service: String,

    #[arg(long, default_value = "")]
    pub message: String,
}

#[derive(Args)]
pub struct SubscribeArgs {
    /// 邮箱地址
    pub email: String,
}

/// 执行命令
pub async fn execute(cli: Cli) -> Result<()> {
    let engine = Engine::new(cli.path.clone())?;

    match cli.command {
        Commands::List(args) => {
            let mut listing = engine.listing().await;
            listing.filter_by_category(&args.category);
            if let Some(term) = &args.search {
                listing.search(term);
            }
            for _ in 0..args.more {
                listing.load_more();
            }

            if args.json {
                print_listing_json(&listing)?;
            } else {
                print_listing(&listing);
            }
        }
        Commands::Show(args) => {
            let outcome = engine.load().await;
            let data = outcome.data();
            match resolve_post(&data.posts, &args.location)? {
                Some(post) => {
                    println!("{}", post.title.bright_cyan().bold());
                    println!(
                        "{} · {} · {}",
                        data.category_label(&post.category).bright_green(),
                        post.display_date(),
                        post.read_time
                    );
                    println!();
                    println!("{}", seo::post_head(post, &engine.config));
                }
                None => bail!("No post id found in {}", args.location),
            }
        }
        Commands::Generate => {
            let pages = engine.generate().await?;
            info!("Wrote {} pages to {}", pages, engine.public_dir.display());
        }
        Commands::Server(args) => {
            engine.server(args.port).await?;
        }
        Commands::Clean => {
            engine.clean()?;
        }
        Commands::Contact(args) => {
            let form = ContactForm {
                name: args.name,
                email: args.email,
                service: args.service,
                message: args.message,
            };
            println!("Sending...");
            report(engine.contact(&form).await)?;
        }
        Commands::Subscribe(args) => {
            println!("Subscribing...");
            report(engine.subscribe(&args.email).await)?;
        }
    }

    Ok(())
}

fn print_listing(listing: &Listing) {
    let view = listing.view();
    let state = listing.state();

    println!(
        "{} {}  {} {:?}  {} {}",
        "category:".dimmed(),
        state.current_filter,
        "search:".dimmed(),
        state.search_term,
        "page:".dimmed(),
        state.current_page
    );
    println!("{} articles", view.total.to_string().bright_green());

    if view.is_empty() {
        println!("{}", "No articles found. Try adjusting your search or filter criteria.".yellow());
        return;
    }

    if let Some(featured) = view.featured {
        println!();
        println!("{} {}", "★".bright_yellow(), featured.title.bold());
        println!("  {}", featured.excerpt);
    }

    println!();
    for post in &view.visible {
        println!(
            "  {:>4}  {}  {}  [{}]",
            post.id,
            post.display_date().dimmed(),
            post.title,
            listing.category_label(&post.category).bright_blue()
        );
    }

    if let Some(label) = view.load_more_label() {
        println!();
        println!("{}", label.bright_cyan());
    }
}

fn print_listing_json(listing: &Listing) -> Result<()> {
    let output = json!({
        "state": listing.state(),
        "view": listing.view(),
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn report(result: Result<Notification, BlogError>) -> Result<()> {
    let notification = match result {
        Ok(notification) => notification,
        Err(e) => Notification::from_error(&e),
    };

    match notification.kind {
        NotificationKind::Success => println!("{}", notification.message.green()),
        NotificationKind::Info => println!("{}", notification.message.bright_blue()),
        NotificationKind::Error => {
            eprintln!("{}", notification.message.red());
            bail!("form submission rejected");
        }
    }
    Ok(())
}
