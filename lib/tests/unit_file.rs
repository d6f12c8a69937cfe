use std::fs;

use svcfilelib::files::{read_definition, write_unit};
use svcfilelib::section::Section;
use svcfilelib::{
    render, Install, Restart, Service, ServiceSection, ServiceType, SystemdBool, Target, Unit,
};

fn populated() -> Service {
    Service::new(
        "full",
        Unit {
            description: Some("Everything set".to_string()),
            documentation: Some("man:full(8)".to_string()),
            before: Some(Target::MultiUser),
            after: Some(Target::Network),
            wants: Some(Target::Network),
            condition_path_exists: Some("/etc/full.conf".to_string()),
            conflicts: Some("other.service".to_string()),
        },
        ServiceSection {
            exec_start: Some("/usr/bin/full".to_string()),
            exec_stop: Some("/usr/bin/full --stop".to_string()),
            user: Some("full".to_string()),
            restart: Some(Restart::Always),
            timeout_stop_sec: Some(30),
            pid_file: Some("/run/full.pid".to_string()),
            remain_after_exit: Some(SystemdBool::No),
            ..Default::default()
        },
        Install {
            wanted_by: Some(Target::MultiUser),
            alias: Some("f.service".to_string()),
        },
    )
}

fn section_lines<'a>(text: &'a str, header: &str) -> Vec<&'a str> {
    text.lines()
        .skip_while(|l| *l != format!("[{header}]"))
        .skip(1)
        .take_while(|l| !l.is_empty())
        .collect()
}

fn emitted_keys<'a>(text: &'a str, header: &str) -> Vec<&'a str> {
    section_lines(text, header)
        .into_iter()
        .map(|l| l.split_once('=').unwrap().0)
        .collect()
}

fn assert_catalog_order<S: Section>(text: &str) {
    let catalog: Vec<_> = S::keys().collect();
    let positions: Vec<usize> = emitted_keys(text, S::HEADER)
        .iter()
        .map(|k| catalog.iter().position(|c| c == k).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
}

#[test]
fn render_is_deterministic() {
    let service = populated();
    assert_eq!(render(&service), render(&service));
}

#[test]
fn keys_follow_catalog_order() {
    let text = render(&populated());
    assert_catalog_order::<Unit>(&text);
    assert_catalog_order::<ServiceSection>(&text);
    assert_catalog_order::<Install>(&text);
    assert_eq!(
        emitted_keys(&text, "Service"),
        [
            "ExecStart",
            "ExecStop",
            "User",
            "Restart",
            "TimeoutStopSec",
            "PIDFile",
            "RemainAfterExit"
        ]
    );
}

#[test]
fn full_service_section_order() {
    let some = |s: &str| Some(s.to_string());
    let mut service = populated();
    service.service = ServiceSection {
        service_type: Some(ServiceType::Forking),
        exec_start_pre: some("/usr/bin/full --check"),
        exec_start: some("/usr/bin/full"),
        exec_reload: some("/bin/kill -HUP $MAINPID"),
        exec_stop: some("/usr/bin/full --stop"),
        restart_sec: some("5s"),
        user: some("full"),
        group: some("full"),
        restart: Some(Restart::OnAbnormal),
        timeout_start_sec: Some(0),
        timeout_stop_sec: Some(30),
        success_exit_status: some("143"),
        restart_prevent_exit_status: some("SIGKILL"),
        pid_file: some("/run/full.pid"),
        working_directory: some("/var/lib/full"),
        root_directory: some("/srv/full"),
        logs_directory: some("full"),
        kill_mode: some("process"),
        condition_path_exists: some("/usr/bin/full"),
        remain_after_exit: Some(SystemdBool::Yes),
    };
    let text = render(&service);
    assert_eq!(
        section_lines(&text, "Service"),
        [
            "Type=forking",
            "ExecStartPre=/usr/bin/full --check",
            "ExecStart=/usr/bin/full",
            "ExecReload=/bin/kill -HUP $MAINPID",
            "ExecStop=/usr/bin/full --stop",
            "RestartSec=5s",
            "User=full",
            "Group=full",
            "Restart=on-abnormal",
            "TimeoutStartSec=0",
            "TimeoutStopSec=30",
            "SuccessExitStatus=143",
            "RestartPreventExitStatus=SIGKILL",
            "PIDFile=/run/full.pid",
            "WorkingDirectory=/var/lib/full",
            "RootDirectory=/srv/full",
            "LogsDirectory=full",
            "KillMode=process",
            "ConditionPathExists=/usr/bin/full",
            "RemainAfterExit=yes",
        ]
    );
}

#[test]
fn unset_fields_produce_no_lines() {
    let text = render(&populated());
    for key in ["Type", "ExecStartPre", "ExecReload", "Group", "TimeoutStartSec", "KillMode"] {
        assert!(
            !text.lines().any(|l| l.starts_with(&format!("{key}="))),
            "{key} should be omitted"
        );
    }
}

#[test]
fn each_header_appears_once_in_order() {
    for service in [populated(), Service::default()] {
        let text = render(&service);
        let headers: Vec<_> = text.lines().filter(|l| l.starts_with('[')).collect();
        assert_eq!(headers, ["[Unit]", "[Service]", "[Install]"]);
    }
}

#[test]
fn writes_unit_file() {
    let dir = tempfile::tempdir().unwrap();
    let service = Service::new_default("app", "My App", "/usr/bin/app");
    let path = write_unit(&service, &dir.path().join("systemd/user")).unwrap();
    assert_eq!(path, dir.path().join("systemd/user/app.service"));
    assert_eq!(fs::read_to_string(path).unwrap(), render(&service));
}

#[test]
fn refuses_to_write_invalid_unit() {
    let dir = tempfile::tempdir().unwrap();
    let service = Service::new_default("app", "My App", "/usr/bin/app\n[Install]");
    assert!(write_unit(&service, dir.path()).is_err());
    assert!(!dir.path().join("app.service").exists());
}

#[test]
fn definition_file_renders() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("app.toml");
    fs::write(
        &path,
        "name = \"app\"\n\n[unit]\ndescription = \"My App\"\nafter = \"network.target\"\n\n\
         [service]\ntype = \"simple\"\nexec_start = \"/usr/bin/app\"\n\n\
         [install]\nwanted_by = \"multi-user.target\"\n",
    )
    .unwrap();
    let service = read_definition(&path).unwrap();
    assert_eq!(service, Service::new_default("app", "My App", "/usr/bin/app"));
}

#[test]
fn missing_definition_file_reports_path() {
    let err = read_definition(std::path::Path::new("/nonexistent/app.toml")).unwrap_err();
    assert!(err.to_string().contains("/nonexistent/app.toml"));
}
