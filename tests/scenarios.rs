//! Runs every query in every scenario file and checks its stated outcome.

use std::fs;

use testresult::TestResult;

use concierge::fixtures::Fixture;

#[test]
fn every_scenario_query_matches_expectation() -> TestResult {
    let mut checked = 0;

    for entry in fs::read_dir(Fixture::base_path().join("scenarios"))? {
        let path = entry?.path();

        if path.extension().is_none_or(|ext| ext != "yml") {
            continue;
        }

        let fixture = Fixture::from_path(&path)?;

        for name in fixture.query_names() {
            let Some(expect) = fixture.query(name)?.expect.clone() else {
                continue;
            };

            let quote = fixture.quote(name)?;
            let context = format!("{} / {name}", path.display());

            assert_eq!(quote.offer().kind(), expect.kind, "{context}");

            if let Some(text) = &expect.promotional_text {
                assert_eq!(quote.offer().promotional_text(), text, "{context}");
            }

            match expect.final_price {
                Some(price) => assert_eq!(quote.final_price()?, price, "{context}"),
                None => assert!(quote.property().is_none(), "{context}"),
            }

            checked += 1;
        }
    }

    assert!(checked > 0, "no scenario queries were checked");

    Ok(())
}
