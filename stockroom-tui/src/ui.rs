//! Terminal rendering

use ratatui::{prelude::*, widgets::*};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use crate::app::{App, Focus};
use crate::render;

pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(3), // Search
            Constraint::Length(9), // Selectors
            Constraint::Min(5),    // Product table
            Constraint::Length(7), // Logs
            Constraint::Length(1), // Key hints
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);
    draw_search(f, app, chunks[1]);
    draw_selectors(f, app, chunks[2]);
    draw_products(f, app, chunks[3]);
    draw_logs(f, chunks[4]);
    draw_hints(f, app, chunks[5]);
}

fn focus_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White).add_modifier(Modifier::DIM)
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let status = if app.is_loading() {
        Span::styled(
            " LOADING... ",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled(
            " READY ",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    };

    let title = Paragraph::new(vec![Line::from(vec![
        Span::raw(" Stockroom "),
        Span::styled(" Product Inventory ", Style::default().fg(Color::Yellow)),
        Span::raw(" | "),
        status,
    ])])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(title, area);
}

fn draw_search(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Search;
    let width = area.width.max(3) - 3;
    let scroll = app.search.visual_scroll(width as usize);

    let input = Paragraph::new(app.search.value())
        .style(focus_style(focused))
        .scroll((0, scroll as u16))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Search descriptions ")
                .border_style(focus_style(focused)),
        );
    f.render_widget(input, area);

    if focused {
        f.set_cursor_position((
            area.x + ((app.search.visual_cursor().max(scroll) - scroll) as u16) + 1,
            area.y + 1,
        ));
    }
}

fn draw_selectors(f: &mut Frame, app: &App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let category_names: Vec<&str> = app
        .selected_categories
        .iter()
        .filter_map(|&id| app.category_name(id))
        .collect();
    draw_selector(
        f,
        halves[0],
        " Categories ",
        app.categories.iter().map(|c| (c.id, c.name.as_str())),
        app.category_cursor,
        &category_names,
        app.focus == Focus::Categories,
    );

    let tag_names: Vec<&str> = app
        .selected_tags
        .iter()
        .filter_map(|&id| app.tag_name(id))
        .collect();
    draw_selector(
        f,
        halves[1],
        " Tags ",
        app.tags.iter().map(|t| (t.id, t.name.as_str())),
        app.tag_cursor,
        &tag_names,
        app.focus == Focus::Tags,
    );
}

fn draw_selector<'a>(
    f: &mut Frame,
    area: Rect,
    title: &str,
    options: impl Iterator<Item = (i64, &'a str)>,
    cursor: usize,
    selected_names: &[&str],
    focused: bool,
) {
    let parts = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let items: Vec<ListItem> = options
        .map(|(id, name)| ListItem::new(format!("{:>4}  {}", id, name)))
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(focus_style(focused)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(cursor));
    f.render_stateful_widget(list, parts[0], &mut state);

    let chips = Paragraph::new(Line::from(vec![
        Span::styled("Selected: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(render::taxonomy_cell(selected_names.iter().copied())),
    ]));
    f.render_widget(chips, parts[1]);
}

fn draw_products(f: &mut Frame, app: &App, area: Rect) {
    let header = Row::new([
        "Product Name",
        "Description",
        "Price",
        "Stock",
        "Categories",
        "Tags",
    ])
    .style(Style::default().add_modifier(Modifier::BOLD));

    let rows: Vec<Row> = app
        .products
        .iter()
        .map(|product| {
            Row::new(vec![
                Cell::from(product.name.clone()),
                Cell::from(render::description_cell(&product.description).to_string()),
                Cell::from(render::format_price(&product.price)),
                Cell::from(product.stock.to_string()),
                Cell::from(render::taxonomy_cell(
                    product.categories.iter().map(|c| c.name.as_str()),
                )),
                Cell::from(render::taxonomy_cell(
                    product.tags.iter().map(|t| t.name.as_str()),
                )),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(18),
        Constraint::Percentage(30),
        Constraint::Length(10),
        Constraint::Length(7),
        Constraint::Percentage(17),
        Constraint::Percentage(18),
    ];

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" Products ({}) ", app.products.len()))
            .border_style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(table, area);

    // Single placeholder row spanning all six columns
    if app.products.is_empty() && area.height > 3 {
        let placeholder_area = Rect {
            x: area.x + 1,
            y: area.y + 2,
            width: area.width.saturating_sub(2),
            height: 1,
        };
        let placeholder = Paragraph::new(render::NO_PRODUCTS)
            .style(Style::default().add_modifier(Modifier::ITALIC))
            .alignment(Alignment::Center);
        f.render_widget(placeholder, placeholder_area);
    }
}

fn draw_logs(f: &mut Frame, area: Rect) {
    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .borders(Borders::ALL)
                .border_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::DIM),
                ),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White));
    f.render_widget(logs, area);
}

fn draw_hints(f: &mut Frame, app: &App, area: Rect) {
    let hints = match app.focus {
        Focus::Search => "Type to search | Enter: filter | Esc: leave field | Tab: next panel",
        Focus::Categories | Focus::Tags => {
            "Up/Down: move | Enter: add | Del: remove | f: filter | Tab: next panel | q: quit"
        }
    };
    let footer = Paragraph::new(hints)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Right);
    f.render_widget(footer, area);
}
