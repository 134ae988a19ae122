use super::*;

#[test]
fn passes_through_the_closure_value() {
    assert_eq!(ensure_sufficient_stack(|| "ok"), "ok");
}

#[test]
fn nested_list_depth_survives() {
    // Mirrors parsing `[[[[...]]]]` one level per call.
    fn depth(n: u32) -> u32 {
        ensure_sufficient_stack(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
    }

    assert_eq!(depth(200_000), 200_000);
}

#[test]
fn propagates_errors_unchanged() {
    fn countdown(n: u32) -> Result<u32, String> {
        ensure_sufficient_stack(|| {
            if n == 0 {
                Err("bottom".to_string())
            } else {
                countdown(n - 1)
            }
        })
    }

    assert_eq!(countdown(50_000), Err("bottom".to_string()));
}
