use meddra::{MeddraService, TermLevel};
use meddra_tests::{hierarchy_record, low_level_term, write_release, Release};
use pretty_assertions::assert_eq;

fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(log::LevelFilter::Debug)
        .try_init();
}

fn release() -> Release {
    write_release(
        &[
            hierarchy_record(
                (10001, "Anaemia folate deficiency"),
                (10101, "Anaemias folate deficiency"),
                (10201, "Anaemias nonhaemolytic and marrow depression"),
                (20001, "Blood disorders", "Blood"),
                true,
            ),
            hierarchy_record(
                (10002, "Anaemia vitamin B12 deficiency"),
                (10101, "Anaemias folate deficiency"),
                (10201, "Anaemias nonhaemolytic and marrow depression"),
                (20001, "Blood disorders", "Blood"),
                true,
            ),
            hierarchy_record(
                (10050, "Myocardial infarction"),
                (10150, "Ischaemic coronary artery disorders"),
                (10250, "Coronary artery disorders"),
                (20050, "Cardiac disorders", "Card"),
                true,
            ),
            hierarchy_record(
                (10050, "Myocardial infarction"),
                (10151, "Vascular emergencies"),
                (10251, "Vascular disorders NEC"),
                (20051, "Vascular disorders", "Vasc"),
                false,
            ),
        ],
        &[
            low_level_term(30050, "Heart attack", 10050, true),
            low_level_term(30051, "Heart attack (old)", 10050, false),
            low_level_term(30052, "Myocardial infarction", 10050, true),
            low_level_term(30001, "\"Folate deficiency anaemia\"", 10001, true),
        ],
    )
    .unwrap()
}

fn load(release: &Release) -> MeddraService {
    init_test_logger();
    MeddraService::load(release.hierarchy_path(), release.llt_path()).unwrap()
}

#[test]
fn pt_scenario_shares_path_id_between_pt_and_soc() {
    let release = release();
    let service = load(&release);
    let result = service
        .get_hierarchy_by_term("Anaemia folate deficiency", "PT")
        .unwrap();

    assert_eq!(result.pt_values.len(), 1);
    assert_eq!(result.pt_values[0].code, "10001");
    assert_eq!(result.pt_values[0].name, "Anaemia folate deficiency");
    assert_eq!(result.soc_values.len(), 1);
    assert_eq!(result.soc_values[0].code, "20001");
    assert_eq!(result.pt_values[0].path_id, 1);
    assert_eq!(result.soc_values[0].path_id, 1);
    let llt_names: Vec<_> = result.llt_values.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(llt_names, vec!["Folate deficiency anaemia"]);
}

#[test]
fn llt_scenario_reaches_pt_and_both_socs() {
    let release = release();
    let service = load(&release);
    let result = service.get_hierarchy_by_term("Heart attack", "LLT").unwrap();

    assert!(!result.pt_values.is_empty());
    assert!(result.pt_values.iter().any(|n| n.code == "10050"));
    assert_eq!(result.llt_values.len(), 1);
    assert!(!result.llt_values[0].is_primary_path);

    let socs: Vec<_> = result
        .soc_values
        .iter()
        .map(|n| (n.code.as_str(), n.path_id, n.is_primary_path))
        .collect();
    assert_eq!(socs, vec![("20050", 1, true), ("20051", 2, false)]);

    let second_path: Vec<_> = result
        .path(2)
        .into_iter()
        .map(|(level, n)| (level, n.code.clone()))
        .collect();
    assert_eq!(
        second_path,
        vec![
            (TermLevel::Hlt, "10151".to_string()),
            (TermLevel::Hlgt, "10251".to_string()),
            (TermLevel::Soc, "20051".to_string()),
        ]
    );
}

#[test]
fn hlt_lookup_collects_every_pt_once() {
    let release = release();
    let service = load(&release);
    let result = service
        .get_hierarchy_by_term("ANAEMIAS FOLATE DEFICIENCY", "hlt")
        .unwrap();

    let pts: Vec<_> = result
        .pt_values
        .iter()
        .map(|n| (n.code.as_str(), n.path_id))
        .collect();
    assert_eq!(pts, vec![("10001", 1), ("10002", 2)]);
    assert_eq!(result.soc_values.len(), 1);
    assert!(result.llt_values.is_empty());
}

#[test]
fn searches_match_case_insensitive_prefixes() {
    let release = release();
    let service = load(&release);

    let pts = service.search_term("AN", "PT").unwrap();
    assert_eq!(pts.pt_values.len(), 2);
    assert!(service.search_term("folate", "PT").unwrap().is_empty());

    let llts = service.search_term("heart", "LLT").unwrap();
    let names: Vec<_> = llts.llt_values.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["Heart attack"]);

    let socs = service.search_term("v", "soc").unwrap();
    assert_eq!(socs.soc_values.len(), 1);
    assert_eq!(socs.soc_values[0].code, "20051");
    assert!(!socs.soc_values[0].is_primary_path);
}

#[test]
fn blank_and_invalid_arguments() {
    let release = release();
    let service = load(&release);

    assert!(service.search_term("", "PT").unwrap().is_empty());
    assert!(service.search_term("   ", "SOC").unwrap().is_empty());
    assert!(service.search_term("an", "XYZ").is_err());
    assert!(service
        .get_hierarchy_by_term("Anaemia folate deficiency", "XYZ")
        .is_err());
}

#[test]
fn stats_reflect_the_release() {
    let release = release();
    let service = load(&release);
    let stats = service.stats();
    assert_eq!(stats.hierarchy_records, 4);
    assert_eq!(stats.low_level_terms, 4);
    assert_eq!(stats.current_low_level_terms, 3);
    assert_eq!(stats.distinct_pts, 3);
    assert_eq!(stats.distinct_socs, 3);
}

#[test]
fn corrupt_code_fails_the_load() {
    let release = release();
    let mut text = std::fs::read_to_string(release.hierarchy_path()).unwrap();
    text.push_str("1O001$1$2$3$pt$hlt$hlgt$soc$S$$$Y$\n");
    std::fs::write(release.hierarchy_path(), text).unwrap();

    let err = MeddraService::load(release.hierarchy_path(), release.llt_path()).unwrap_err();
    assert!(matches!(err, meddra::ServiceError::Load(_)));
    assert!(err.to_string().contains("1O001"));
}
