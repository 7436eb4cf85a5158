// hwmon / thermal / DRM trees through to display sections

use super::fake_tree::FakeTree;
use jayinsights::core::config::Config;
use jayinsights::core::sensors::{build_sections, read_sensors, RowValue, SensorSection};
use jayinsights::core::system_info::gpu::drm_temperatures;

fn labels(section: &SensorSection) -> Vec<&str> {
    section.rows.iter().map(|row| row.label.as_str()).collect()
}

fn desktop_tree() -> FakeTree {
    let tree = FakeTree::new();

    let coretemp = "/sys/class/hwmon/hwmon0";
    tree.write(&format!("{}/name", coretemp), "coretemp\n")
        .write(&format!("{}/temp1_input", coretemp), "45000\n")
        .write(&format!("{}/temp1_label", coretemp), "Package id 0\n")
        .write(&format!("{}/temp2_input", coretemp), "41000\n")
        .write(&format!("{}/temp2_label", coretemp), "Core 0\n")
        .write(&format!("{}/temp3_input", coretemp), "83000\n")
        .write(&format!("{}/temp3_label", coretemp), "Core 1\n");

    let superio = "/sys/class/hwmon/hwmon1";
    tree.write(&format!("{}/name", superio), "nct6798\n")
        .write(&format!("{}/temp1_input", superio), "31000\n")
        .write(&format!("{}/temp1_label", superio), "SYSTIN\n")
        .write(&format!("{}/temp2_input", superio), "52000\n")
        .write(&format!("{}/temp2_label", superio), "PCH_CHIP_TEMP\n")
        .write(&format!("{}/temp3_input", superio), "0\n")
        .write(&format!("{}/temp3_label", superio), "Motherboard\n")
        .write(&format!("{}/fan1_input", superio), "820\n")
        .write(&format!("{}/fan2_input", superio), "0\n");

    let amdgpu = "/sys/class/drm/card0/device/hwmon/hwmon2";
    tree.write(&format!("{}/name", amdgpu), "amdgpu\n")
        .write(&format!("{}/temp1_input", amdgpu), "54000\n")
        .write(&format!("{}/temp1_label", amdgpu), "edge\n")
        .write(&format!("{}/fan1_input", amdgpu), "1500\n");
    // The hwmon class lists the same device again
    tree.write("/sys/class/hwmon/hwmon2/name", "amdgpu\n")
        .write("/sys/class/hwmon/hwmon2/temp1_input", "54000\n")
        .write("/sys/class/hwmon/hwmon2/temp1_label", "edge\n")
        .write("/sys/class/hwmon/hwmon2/fan1_input", "1500\n");

    tree.write("/sys/class/hwmon/hwmon3/name", "nvme\n")
        .write("/sys/class/hwmon/hwmon3/temp1_input", "38000\n");

    tree.write("/sys/class/thermal/thermal_zone0/temp", "27800\n");

    tree
}

#[test]
fn test_scrape_keys() {
    let tree = desktop_tree();
    let sample = read_sensors(&tree.root());

    assert_eq!(sample.temperatures["Core 1"], 83.0);
    assert_eq!(sample.temperatures["PCH_CHIP_TEMP"], 52.0);
    assert_eq!(sample.temperatures["nvme Temp1"], 38.0);
    assert_eq!(sample.temperatures["thermal_zone0"], 27.8);
    assert_eq!(sample.fan_speeds["nct6798 Fan1"], 820);
    assert_eq!(sample.fan_speeds["nct6798 Fan2"], 0);
    assert_eq!(sample.fan_speeds["amdgpu Fan1"], 1500);
}

#[test]
fn test_sections_from_desktop_tree() {
    let tree = desktop_tree();
    let root = tree.root();

    let mut config = Config::default();
    config
        .fan_labels
        .insert("Fan1".to_string(), "Front intake".to_string());

    let sample = read_sensors(&root);
    let drm = drm_temperatures(&root);
    let sections = build_sections(&sample, &drm, &config);

    assert_eq!(labels(&sections.cpu), vec!["Core 0", "Core 1"]);
    assert!(!sections.cpu.rows[0].hot);
    assert!(sections.cpu.rows[1].hot);

    // SYSTIN is unclassified and the zero "Motherboard" reading is dropped
    assert_eq!(labels(&sections.motherboard), vec!["PCH"]);
    assert_eq!(sections.motherboard.rows[0].value, RowValue::Celsius(52.0));

    assert_eq!(labels(&sections.fans), vec!["Fan2", "Front intake"]);
    assert_eq!(sections.fans.rows[1].value, RowValue::Rpm(820));

    // "edge" carries no GPU keyword; it arrives through the DRM scan
    assert_eq!(labels(&sections.gpu), vec!["edge", "GPU Fan (amdgpu)"]);
    assert_eq!(sections.gpu.rows[0].value.to_string(), "54.0°C");

    assert_eq!(labels(&sections.drives), vec!["nvme Temp1"]);
}
