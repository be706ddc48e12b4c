use netplan_core::{compile, format_json, format_summary, serialize, InterfaceDefinition};
use pretty_assertions::assert_eq;

fn static_bond() -> InterfaceDefinition {
    InterfaceDefinition {
        use_static: true,
        addresses: "10.0.1.100/24".to_string(),
        gateway4: "10.0.1.1".to_string(),
        nameservers: "1.1.1.1, 9.9.9.9".to_string(),
        ..InterfaceDefinition::bond("bond0", "eth1, eth2", "active-backup")
    }
}

#[test]
fn mixed_request_renders_full_document_in_declaration_order() {
    let eth0 = InterfaceDefinition {
        dhcp4_overrides: "use-dns=false,use-ntp=false".to_string(),
        ..InterfaceDefinition::ethernet("eth0")
    };
    let bridge = InterfaceDefinition::bridge("br0", "bond0,eth3");

    let config = compile(&[eth0, static_bond(), bridge], "networkd").expect("compile");

    let expected = "\
network:
  version: 2
  renderer: networkd
  ethernets:
    eth0:
      dhcp4: true
      dhcp4-overrides:
        use-dns: false
        use-ntp: false
    eth1:
      dhcp4: false
    eth2:
      dhcp4: false
    eth3:
      dhcp4: false
  bonds:
    bond0:
      interfaces:
        - eth1
        - eth2
      parameters:
        mode: active-backup
      dhcp4: false
      addresses:
        - 10.0.1.100/24
      gateway4: 10.0.1.1
      nameservers:
        addresses:
          - 1.1.1.1
          - 9.9.9.9
  bridges:
    br0:
      interfaces:
        - bond0
        - eth3
      dhcp4: true
";
    assert_eq!(serialize(&config), expected);
}

#[test]
fn static_ethernet_with_ipv6_gateway() {
    let eth0 = InterfaceDefinition {
        use_static: true,
        addresses: "192.168.1.100/24,2001:db8::10/64".to_string(),
        gateway4: "192.168.1.1".to_string(),
        gateway6: "2001:db8::1".to_string(),
        ..InterfaceDefinition::ethernet("eth0")
    };

    let config = compile(&[eth0], "NetworkManager").expect("compile");

    let expected = "\
network:
  version: 2
  renderer: NetworkManager
  ethernets:
    eth0:
      dhcp4: false
      addresses:
        - 192.168.1.100/24
        - 2001:db8::10/64
      gateway4: 192.168.1.1
      gateway6: 2001:db8::1
";
    assert_eq!(serialize(&config), expected);
}

#[test]
fn compiling_twice_is_deterministic() {
    let request = vec![
        InterfaceDefinition::ethernet("eth0"),
        static_bond(),
        InterfaceDefinition::bridge("br0", "bond0"),
    ];

    let first = compile(&request, "networkd").expect("first compile");
    let second = compile(&request, "networkd").expect("second compile");

    assert_eq!(first, second);
    assert_eq!(serialize(&first), serialize(&second));
}

#[test]
fn summary_and_json_describe_sections() {
    let config = compile(&[static_bond()], "networkd").expect("compile");

    assert_eq!(
        format_summary(&config),
        "version=2 renderer=networkd ethernets=2 bonds=1 bridges=0"
    );

    let json: serde_json::Value =
        serde_json::from_str(&format_json(&config).expect("model should serialize"))
            .expect("json should parse");
    assert_eq!(json["bonds"]["bond0"]["parameters"]["mode"], "active-backup");
    assert_eq!(json["bonds"]["bond0"]["interfaces"][1], "eth2");
    assert_eq!(json["ethernets"]["eth1"]["dhcp4"], "disabled");
}

#[test]
fn rendered_document_reads_back_with_typed_values() {
    let eth0 = InterfaceDefinition {
        dhcp4_overrides: "hostname=,route-metric=100,mode=1.5,tag=#edge,use-dns=false".to_string(),
        ..InterfaceDefinition::ethernet("eth0")
    };
    let config = compile(&[eth0, static_bond()], "").expect("compile");

    let doc: serde_yaml::Value =
        serde_yaml::from_str(&serialize(&config)).expect("output should be valid YAML");
    let network = &doc["network"];
    assert_eq!(network["version"].as_u64(), Some(2));
    assert_eq!(network["renderer"].as_str(), Some(""));

    let overrides = &network["ethernets"]["eth0"]["dhcp4-overrides"];
    assert_eq!(overrides["hostname"].as_str(), Some(""));
    assert_eq!(overrides["route-metric"].as_i64(), Some(100));
    assert_eq!(overrides["mode"].as_str(), Some("1.5"));
    assert_eq!(overrides["tag"].as_str(), Some("#edge"));
    assert_eq!(overrides["use-dns"].as_bool(), Some(false));

    let bond = &network["bonds"]["bond0"];
    assert_eq!(bond["parameters"]["mode"].as_str(), Some("active-backup"));
    assert_eq!(bond["gateway4"].as_str(), Some("10.0.1.1"));
    assert_eq!(bond["interfaces"][1].as_str(), Some("eth2"));
    assert_eq!(network["ethernets"]["eth1"]["dhcp4"].as_bool(), Some(false));
}
