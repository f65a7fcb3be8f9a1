use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdDownload;
use dioxus_free_icons::Icon;
use shared_types::{
    status_style, Contract, DeadlineNotice, QuickAction, StatCard, StatusStyle,
};
use shared_ui::{
    Badge, BadgeVariant, Button, ButtonVariant, Card, CardContent, CardHeading, CardTitle,
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableHeader, DataTableRow,
    PageHeader, PageSubtitle, PageTitle, Stagger, StaggerItem,
};

use super::icons::PortalIconView;

/// Maps a raw contract status label to its badge classes.
pub type StatusStyler = fn(&str) -> StatusStyle;

/// Contract table column headers, left to right.
const CONTRACT_COLUMNS: [&str; 6] = ["Contrato", "Cliente", "Estado", "Fechas", "Valor", "Acciones"];

/// Body of the dashboard view: greeting, stat grid, contract table and the
/// deadlines / quick-actions footer, in that order.
///
/// Purely presentational. Every list is rendered in the order given.
#[component]
pub fn DashboardContent(
    user_name: String,
    stats: Vec<StatCard>,
    contracts: Vec<Contract>,
    deadlines: Vec<DeadlineNotice>,
    actions: Vec<QuickAction>,
    #[props(default = status_style as StatusStyler)] status_style: StatusStyler,
    #[props(default = true)] animate: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./content.css") }

        Stagger { animate,
            StaggerItem { index: 0,
                PageHeader {
                    PageTitle { "Hola, {user_name}" }
                    PageSubtitle { "Gestiona tus contratos y mantente al día con tus proyectos." }
                }
            }
            StaggerItem { index: 1,
                StatGrid { stats }
            }
            StaggerItem { index: 2,
                ContractTable { contracts, status_style }
            }
            StaggerItem { index: 3,
                div { class: "portal-panels",
                    DeadlinesPanel { deadlines }
                    QuickActionsPanel { actions }
                }
            }
        }
    }
}

/// Responsive grid of stat tiles: 4 columns wide, 2 medium, 1 narrow.
#[component]
fn StatGrid(stats: Vec<StatCard>) -> Element {
    rsx! {
        div { class: "portal-stat-grid",
            for (index, stat) in stats.into_iter().enumerate() {
                StatTile { key: "{index}", stat }
            }
        }
    }
}

#[component]
fn StatTile(stat: StatCard) -> Element {
    rsx! {
        Card { hover: true, class: "portal-stat-card",
            CardContent {
                div {
                    class: "portal-stat-icon bg-gradient-to-r {stat.accent.gradient()}",
                    PortalIconView { icon: stat.icon }
                }
                h3 { class: "portal-stat-value", "{stat.value}" }
                p { class: "portal-stat-title", "{stat.title}" }
                p { class: "portal-stat-description", "{stat.description}" }
            }
        }
    }
}

/// Status label rendered as a colored pill.
#[component]
pub fn StatusBadge(status: String, style: StatusStyle) -> Element {
    rsx! {
        Badge { variant: BadgeVariant::Pill, class: style.class(), "{status}" }
    }
}

/// "Mis Contratos" table. The new-contract, view and download controls
/// are inert.
#[component]
fn ContractTable(contracts: Vec<Contract>, status_style: StatusStyler) -> Element {
    rsx! {
        Card { class: "portal-contracts",
            CardHeading {
                title: "Mis Contratos".to_string(),
                description: "Gestiona y revisa tus contratos actuales".to_string(),
                action: rsx! {
                    Button { variant: ButtonVariant::Primary, "Nuevo Contrato" }
                },
            }
            DataTable {
                DataTableHeader {
                    for column in CONTRACT_COLUMNS {
                        DataTableColumn { key: "{column}", "{column}" }
                    }
                }
                DataTableBody {
                    for contract in contracts {
                        DataTableRow { key: "{contract.id}",
                            DataTableCell {
                                div { class: "portal-contract-title", "{contract.title}" }
                                div { class: "portal-contract-id", "{contract.id}" }
                            }
                            DataTableCell { "{contract.client}" }
                            DataTableCell {
                                StatusBadge {
                                    status: contract.status.clone(),
                                    style: status_style(&contract.status),
                                }
                            }
                            DataTableCell { class: "portal-contract-dates",
                                div { "{contract.start_date}" }
                                div { "{contract.end_date}" }
                            }
                            DataTableCell { class: "portal-contract-value", "{contract.value}" }
                            DataTableCell {
                                div { class: "portal-contract-actions",
                                    Button { variant: ButtonVariant::Link, "Ver" }
                                    Button {
                                        variant: ButtonVariant::Link,
                                        class: "portal-contract-download",
                                        aria_label: "Descargar",
                                        Icon::<LdDownload> { icon: LdDownload, width: 16, height: 16 }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn DeadlinesPanel(deadlines: Vec<DeadlineNotice>) -> Element {
    rsx! {
        Card {
            CardContent {
                CardTitle { "Próximos Vencimientos" }
                div { class: "portal-notice-list",
                    for (index, notice) in deadlines.into_iter().enumerate() {
                        div {
                            key: "{index}",
                            class: "portal-notice",
                            "data-severity": notice.severity.as_str(),
                            PortalIconView { icon: notice.severity.icon(), size: 20 }
                            div {
                                p { class: "portal-notice-title", "{notice.title}" }
                                p { class: "portal-notice-detail", "{notice.detail}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn QuickActionsPanel(actions: Vec<QuickAction>) -> Element {
    rsx! {
        Card {
            CardContent {
                CardTitle { "Acciones Rápidas" }
                div { class: "portal-action-list",
                    for (index, action) in actions.into_iter().enumerate() {
                        Button {
                            key: "{index}",
                            variant: ButtonVariant::Outline,
                            class: "portal-quick-action",
                            span {
                                class: "portal-quick-action-icon",
                                "data-accent": action.accent.as_str(),
                                PortalIconView { icon: action.icon, size: 20 }
                            }
                            span { class: "portal-quick-action-label", "{action.label}" }
                        }
                    }
                }
            }
        }
    }
}
