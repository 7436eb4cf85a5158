// SMBIOS memory device scan over /sys/firmware/dmi/entries

use super::fake_tree::{type17, FakeTree};
use jayinsights::core::system_info::memory::read_memory_devices;
use jayinsights::core::system_info::MemoryType;
use jayinsights::InsightError;

const ENTRIES: &str = "/sys/firmware/dmi/entries";

#[test]
fn test_scan_decodes_populated_banks_in_entry_order() {
    let tree = FakeTree::new();
    tree.write(
        &format!("{}/17-0/raw", ENTRIES),
        type17(16384, 0, 3000, 0x1A, ["DIMM_A1", "BANK 0", "029E"]),
    )
    .write(
        &format!("{}/17-1/raw", ENTRIES),
        type17(0xFFFF, 0, 3000, 0x1A, ["DIMM_A2", "BANK 1", "029E"]),
    )
    .write(
        &format!("{}/17-2/raw", ENTRIES),
        type17(0xC000, 0, 1600, 0x18, ["DIMM_B1", "BANK 2", ""]),
    )
    .write(
        &format!("{}/17-10/raw", ENTRIES),
        type17(0x7FFF, 65536, 4800, 0x22, ["DIMM_B2", "BANK 3", "Acme Memory"]),
    )
    // Type 16 (physical memory array) is not a memory device
    .write(&format!("{}/16-0/raw", ENTRIES), vec![16u8; 0x17]);

    let banks = read_memory_devices(&tree.root()).unwrap();

    assert_eq!(banks.len(), 3);

    assert_eq!(banks[0].locator, "DIMM_A1");
    assert_eq!(banks[0].bank_locator, "BANK 0");
    assert_eq!(banks[0].size_mb, 16384);
    assert_eq!(banks[0].speed_mhz, 3000);
    assert_eq!(banks[0].memory_type, MemoryType::Ddr4);
    assert_eq!(banks[0].manufacturer, "Corsair");

    // KB granularity: 0x4000 KB
    assert_eq!(banks[1].locator, "DIMM_B1");
    assert_eq!(banks[1].size_mb, 16);
    assert_eq!(banks[1].memory_type.to_string(), "DDR3");
    assert_eq!(banks[1].manufacturer, "Unknown");

    // 17-10 sorts after 17-2
    assert_eq!(banks[2].locator, "DIMM_B2");
    assert_eq!(banks[2].size_mb, 65536);
    assert_eq!(banks[2].memory_type, MemoryType::Ddr5);
    assert_eq!(banks[2].manufacturer, "Acme Memory");
}

#[test]
fn test_scan_with_only_empty_slots_is_ok_and_empty() {
    let tree = FakeTree::new();
    tree.write(
        &format!("{}/17-0/raw", ENTRIES),
        type17(0, 0, 0, 0x02, ["DIMM_A1", "BANK 0", ""]),
    );

    let banks = read_memory_devices(&tree.root()).unwrap();
    assert!(banks.is_empty());
}

#[test]
fn test_missing_entries_are_unavailable() {
    let tree = FakeTree::new();
    let err = read_memory_devices(&tree.root()).unwrap_err();
    assert!(matches!(err, InsightError::DmiUnavailable(_)));
}

#[test]
fn test_unreadable_entries_are_unavailable() {
    let tree = FakeTree::new();
    // Entry directory exists but its raw blob cannot be read
    tree.mkdir(&format!("{}/17-0", ENTRIES));

    let err = read_memory_devices(&tree.root()).unwrap_err();
    assert!(matches!(err, InsightError::DmiUnavailable(_)));
    assert!(err.to_string().contains("not readable"));
}
