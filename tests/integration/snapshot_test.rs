// One full collection over a fake machine

use super::fake_tree::{type17, FakeTree};
use jayinsights::core::config::Config;
use jayinsights::core::system_info::gpu::{GpuIdentityProvider, SysfsIdentityProvider};
use jayinsights::core::system_info::{Collector, RamBanks};
use jayinsights::ui::cards::layout;

const CPUINFO: &str = "\
processor\t: 0
model name\t: Intel(R) Core(TM) i7-9700K CPU @ 3.60GHz
physical id\t: 0
core id\t\t: 0
cpu MHz\t\t: 3600.000

processor\t: 1
model name\t: Intel(R) Core(TM) i7-9700K CPU @ 3.60GHz
physical id\t: 0
core id\t\t: 1
cpu MHz\t\t: 4700.125
";

fn machine() -> FakeTree {
    let tree = FakeTree::new();

    tree.write("/proc/cpuinfo", CPUINFO);

    tree.write("/sys/class/dmi/id/board_vendor", "ASUSTeK COMPUTER INC.\n")
        .write("/sys/class/dmi/id/board_name", "PRIME Z390-A\n")
        .write("/sys/class/dmi/id/board_version", "Rev X.0x\n")
        .write("/sys/class/dmi/id/bios_vendor", "American Megatrends Inc.\n")
        .write("/sys/class/dmi/id/bios_version", "2417\n")
        .write("/sys/class/dmi/id/bios_date", "08/14/2019\n")
        .write("/sys/class/dmi/id/bios_release", "5.13\n");

    tree.write(
        "/sys/firmware/dmi/entries/17-0/raw",
        type17(16384, 0, 3000, 0x1A, ["DIMM_A1", "BANK 0", "029E"]),
    );

    tree.write("/sys/class/drm/card0/device/vendor", "0x10de\n")
        .write("/sys/class/drm/card0/device/device", "0x1e87\n")
        .write("/sys/class/drm/card0/device/subsystem_vendor", "0x3842\n")
        .write("/sys/class/drm/card0/device/vbios_version", "90.04.23.00.5F\n");

    tree.write("/sys/class/hwmon/hwmon0/name", "coretemp\n")
        .write("/sys/class/hwmon/hwmon0/temp2_input", "41000\n")
        .write("/sys/class/hwmon/hwmon0/temp2_label", "Core 0\n");

    tree.write("/sys/block/sda/size", "976773168\n")
        .write("/sys/block/sda/device/model", "Crucial CT500MX\n");

    tree
}

#[test]
fn test_collect_full_snapshot() {
    let tree = machine();
    let providers: Vec<Box<dyn GpuIdentityProvider>> = vec![Box::new(SysfsIdentityProvider)];
    let collector = Collector::new(tree.root(), &providers, Config::default());

    let snapshot = collector.collect();

    assert_eq!(snapshot.cpu.model, "Intel(R) Core(TM) i7-9700K CPU @ 3.60GHz");
    assert_eq!(snapshot.cpu.core_speeds_mhz, vec!["3600.000", "4700.125"]);
    assert_eq!(snapshot.cpu.threads, Some(2));

    assert_eq!(snapshot.board.name, "PRIME Z390-A");
    assert_eq!(snapshot.board.serial, "N/A");
    assert_eq!(snapshot.bios.release, "5.13");
    assert!(snapshot.memory_summary.is_none());

    match &snapshot.ram {
        RamBanks::Available(banks) => {
            assert_eq!(banks.len(), 1);
            assert_eq!(banks[0].manufacturer, "Corsair");
        }
        RamBanks::Unavailable { reason } => panic!("unexpected: {}", reason),
    }
    assert_eq!(snapshot.ram.total_mb(), Some(16384));

    assert_eq!(snapshot.gpu.vendor, "NVIDIA Corporation");
    assert_eq!(snapshot.gpu.subsystem_vendor, "eVga.com. Corp.");
    assert!(snapshot.gpu.model.contains("RTX 2080"), "{}", snapshot.gpu.model);
    assert_eq!(snapshot.gpu.vbios, "90.04.23.00.5F");

    assert_eq!(snapshot.drives.len(), 1);
    assert_eq!(snapshot.sensors.cpu.rows.len(), 1);
    assert_eq!(snapshot.sensors.cpu.rows[0].label, "Core 0");
}

#[test]
fn test_cards_for_snapshot() {
    let tree = machine();
    let collector = Collector::new(tree.root(), &[], Config::default());
    let columns = layout(&collector.collect(), true);

    let titles: Vec<&str> = columns.system.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["CPU Info", "Motherboard Info (DMI)", "BIOS Info (DMI)", "GPU Info"]
    );

    let storage: Vec<&str> = columns.storage.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(storage, vec!["Drive: sda", "RAM Info"]);

    let ram = &columns.storage[1];
    assert_eq!(ram.lines[0].text, "Total RAM: 16384 MB");
    assert_eq!(ram.lines[1].text, "Bank #1");
}

#[test]
fn test_unprivileged_machine_keeps_summary() {
    let tree = FakeTree::new();
    tree.write("/sys/class/dmi/id/memory_size", "32 GB\n")
        .mkdir("/sys/firmware/dmi/entries/17-0");

    let collector = Collector::new(tree.root(), &[], Config::default());
    let snapshot = collector.collect();

    assert!(matches!(snapshot.ram, RamBanks::Unavailable { .. }));
    assert_eq!(snapshot.memory_summary.as_ref().unwrap().size, "32 GB");
    assert_eq!(snapshot.cpu.model, "N/A");
}
