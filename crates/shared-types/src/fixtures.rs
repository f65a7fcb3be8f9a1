//! Fixed content of the user dashboard.
//!
//! Every call builds fresh values; nothing here is stored or mutated.

use crate::contract::{Contract, ContractStatus};
use crate::notice::{DeadlineNotice, NoticeSeverity, QuickAction};
use crate::stats::{Accent, PortalIcon, StatCard};

fn stat(title: &str, value: &str, description: &str, icon: PortalIcon, accent: Accent) -> StatCard {
    StatCard {
        title: title.to_string(),
        value: value.to_string(),
        description: description.to_string(),
        icon,
        accent,
    }
}

/// The four stat tiles, in grid order.
pub fn user_stats() -> Vec<StatCard> {
    vec![
        stat("Mis Contratos", "12", "Contratos activos", PortalIcon::FileText, Accent::Blue),
        stat("Vencimientos", "3", "Próximos 30 días", PortalIcon::Calendar, Accent::Orange),
        stat("Completados", "45", "Contratos finalizados", PortalIcon::CheckCircle, Accent::Green),
        stat("En Revisión", "2", "Esperando aprobación", PortalIcon::Clock, Accent::Purple),
    ]
}

fn contract(
    id: &str,
    title: &str,
    client: &str,
    status: ContractStatus,
    start_date: &str,
    end_date: &str,
    value: &str,
) -> Contract {
    Contract {
        id: id.to_string(),
        title: title.to_string(),
        client: client.to_string(),
        status: status.label().to_string(),
        start_date: start_date.to_string(),
        end_date: end_date.to_string(),
        value: value.to_string(),
    }
}

/// Contracts listed in the "Mis Contratos" table, in row order.
pub fn my_contracts() -> Vec<Contract> {
    vec![
        contract(
            "CNT-001",
            "Contrato de Servicios IT",
            "TechCorp S.A.",
            ContractStatus::Active,
            "2024-01-15",
            "2024-12-15",
            "$15,000",
        ),
        contract(
            "CNT-002",
            "Consultoría Digital",
            "InnovaLab",
            ContractStatus::Pending,
            "2024-02-01",
            "2024-08-01",
            "$8,500",
        ),
        contract(
            "CNT-003",
            "Desarrollo Web",
            "StartupXYZ",
            ContractStatus::InReview,
            "2024-01-20",
            "2024-06-20",
            "$12,000",
        ),
    ]
}

pub fn upcoming_deadlines() -> Vec<DeadlineNotice> {
    vec![
        DeadlineNotice {
            title: "Contrato CNT-001".to_string(),
            detail: "Vence en 15 días".to_string(),
            severity: NoticeSeverity::Warning,
        },
        DeadlineNotice {
            title: "Revisión CNT-003".to_string(),
            detail: "Pendiente de aprobación".to_string(),
            severity: NoticeSeverity::Caution,
        },
    ]
}

pub fn quick_actions() -> Vec<QuickAction> {
    vec![
        QuickAction {
            label: "Crear Nuevo Contrato".to_string(),
            icon: PortalIcon::FileText,
            accent: Accent::Blue,
        },
        QuickAction {
            label: "Programar Reunión".to_string(),
            icon: PortalIcon::Calendar,
            accent: Accent::Green,
        },
        QuickAction {
            label: "Descargar Documentos".to_string(),
            icon: PortalIcon::Download,
            accent: Accent::Purple,
        },
    ]
}
