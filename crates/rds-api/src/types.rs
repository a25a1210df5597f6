use std::fmt;

use query_protocol::{Field, Operation, describe};

use crate::{API_VERSION, SERVICE_NAME};

// ── Modify DB instance ──────────────────────────────────────────────

/// Changes settings of an existing DB instance.
///
/// Only the fields that are set are sent; everything else keeps its
/// current value on the instance. Most changes wait for the next
/// maintenance window unless `apply_immediately` is `Some(true)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ModifyDbInstanceRequest {
    pub db_instance_identifier: Option<String>,
    /// New storage size in GiB.
    pub allocated_storage: Option<i32>,
    pub db_instance_class: Option<String>,
    /// Sent as `DBSecurityGroups.DBSecurityGroupName.N`.
    pub db_security_groups: Option<Vec<String>>,
    /// Sent as `VpcSecurityGroupIds.VpcSecurityGroupId.N`.
    pub vpc_security_group_ids: Option<Vec<String>>,
    pub apply_immediately: Option<bool>,
    pub master_user_password: Option<String>,
    pub db_parameter_group_name: Option<String>,
    /// Days to keep automated backups; `0` disables them.
    pub backup_retention_period: Option<i32>,
    /// Daily UTC range, `hh24:mi-hh24:mi`.
    pub preferred_backup_window: Option<String>,
    /// Weekly UTC range, `ddd:hh24:mi-ddd:hh24:mi`.
    pub preferred_maintenance_window: Option<String>,
    pub multi_az: Option<bool>,
    pub engine_version: Option<String>,
    pub allow_major_version_upgrade: Option<bool>,
    pub auto_minor_version_upgrade: Option<bool>,
    /// Provisioned IOPS.
    pub iops: Option<i32>,
    pub option_group_name: Option<String>,
    /// Renames the instance.
    pub new_db_instance_identifier: Option<String>,
    pub storage_type: Option<String>,
    pub tde_credential_arn: Option<String>,
    pub tde_credential_password: Option<String>,
    pub ca_certificate_identifier: Option<String>,
}

impl Operation for ModifyDbInstanceRequest {
    const SERVICE: &'static str = SERVICE_NAME;
    const ACTION: &'static str = "ModifyDBInstance";
    const VERSION: &'static str = API_VERSION;
    const FIELDS: &'static [Field<Self>] = &[
        Field::string("DBInstanceIdentifier", |r| r.db_instance_identifier.as_deref()),
        Field::int("AllocatedStorage", |r| r.allocated_storage.map(i64::from)),
        Field::string("DBInstanceClass", |r| r.db_instance_class.as_deref()),
        Field::list_of("DBSecurityGroups", "DBSecurityGroupName", |r| {
            r.db_security_groups.as_deref()
        }),
        Field::list_of("VpcSecurityGroupIds", "VpcSecurityGroupId", |r| {
            r.vpc_security_group_ids.as_deref()
        }),
        Field::bool("ApplyImmediately", |r| r.apply_immediately),
        Field::string("MasterUserPassword", |r| r.master_user_password.as_deref()),
        Field::string("DBParameterGroupName", |r| r.db_parameter_group_name.as_deref()),
        Field::int("BackupRetentionPeriod", |r| {
            r.backup_retention_period.map(i64::from)
        }),
        Field::string("PreferredBackupWindow", |r| r.preferred_backup_window.as_deref()),
        Field::string("PreferredMaintenanceWindow", |r| {
            r.preferred_maintenance_window.as_deref()
        }),
        Field::bool("MultiAZ", |r| r.multi_az),
        Field::string("EngineVersion", |r| r.engine_version.as_deref()),
        Field::bool("AllowMajorVersionUpgrade", |r| r.allow_major_version_upgrade),
        Field::bool("AutoMinorVersionUpgrade", |r| r.auto_minor_version_upgrade),
        Field::int("Iops", |r| r.iops.map(i64::from)),
        Field::string("OptionGroupName", |r| r.option_group_name.as_deref()),
        Field::string("NewDBInstanceIdentifier", |r| {
            r.new_db_instance_identifier.as_deref()
        }),
        Field::string("StorageType", |r| r.storage_type.as_deref()),
        Field::string("TdeCredentialArn", |r| r.tde_credential_arn.as_deref()),
        Field::string("TdeCredentialPassword", |r| r.tde_credential_password.as_deref()),
        Field::string("CACertificateIdentifier", |r| {
            r.ca_certificate_identifier.as_deref()
        }),
    ];
}

impl fmt::Display for ModifyDbInstanceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", describe(self))
    }
}

#[cfg(test)]
mod tests {
    use query_protocol::{ListStyle, Marshaller, ParameterSet, marshall};

    use super::*;

    fn pairs(params: &ParameterSet) -> Vec<(&str, &str)> {
        params.iter().collect()
    }

    #[test]
    fn every_field_is_declared_once() {
        let mut names: Vec<_> = ModifyDbInstanceRequest::FIELDS
            .iter()
            .map(|f| f.name())
            .collect();
        assert_eq!(names.len(), 22);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 22);
    }

    #[test]
    fn resize_and_apply_now() {
        let request = ModifyDbInstanceRequest {
            db_instance_identifier: Some("orders-db".into()),
            allocated_storage: Some(200),
            db_instance_class: Some("db.m3.large".into()),
            apply_immediately: Some(true),
            ..Default::default()
        };

        let params = marshall(Some(&request)).unwrap();
        assert_eq!(
            pairs(&params),
            [
                ("Action", "ModifyDBInstance"),
                ("Version", "2014-10-31"),
                ("DBInstanceIdentifier", "orders-db"),
                ("AllocatedStorage", "200"),
                ("DBInstanceClass", "db.m3.large"),
                ("ApplyImmediately", "true"),
            ]
        );
    }

    #[test]
    fn security_groups_use_their_member_names() {
        let request = ModifyDbInstanceRequest {
            db_instance_identifier: Some("orders-db".into()),
            db_security_groups: Some(vec!["default".into(), "reporting".into()]),
            vpc_security_group_ids: Some(vec!["sg-1a2b3c".into()]),
            multi_az: Some(false),
            ..Default::default()
        };

        let params = marshall(Some(&request)).unwrap();
        assert_eq!(
            pairs(&params),
            [
                ("Action", "ModifyDBInstance"),
                ("Version", "2014-10-31"),
                ("DBInstanceIdentifier", "orders-db"),
                ("DBSecurityGroups.DBSecurityGroupName.1", "default"),
                ("DBSecurityGroups.DBSecurityGroupName.2", "reporting"),
                ("VpcSecurityGroupIds.VpcSecurityGroupId.1", "sg-1a2b3c"),
                ("MultiAZ", "false"),
            ]
        );

        let flat = Marshaller::new(ListStyle::Flat)
            .marshall(Some(&request))
            .unwrap();
        assert_eq!(flat.get("DBSecurityGroups.2"), Some("reporting"));
        assert_eq!(flat.get("VpcSecurityGroupIds.1"), Some("sg-1a2b3c"));
    }

    #[test]
    fn trailing_fields_keep_declaration_order() {
        let request = ModifyDbInstanceRequest {
            ca_certificate_identifier: Some("rds-ca-2015".into()),
            storage_type: Some("gp2".into()),
            iops: Some(1000),
            backup_retention_period: Some(0),
            ..Default::default()
        };

        let keys: Vec<_> = marshall(Some(&request))
            .unwrap()
            .keys()
            .map(str::to_owned)
            .collect();
        assert_eq!(
            keys,
            [
                "Action",
                "Version",
                "BackupRetentionPeriod",
                "Iops",
                "StorageType",
                "CACertificateIdentifier",
            ]
        );
    }

    #[test]
    fn display_shows_lists_and_scalars() {
        let request = ModifyDbInstanceRequest {
            db_instance_identifier: Some("orders-db".into()),
            vpc_security_group_ids: Some(vec!["sg-1".into(), "sg-2".into()]),
            auto_minor_version_upgrade: Some(true),
            ..Default::default()
        };
        assert_eq!(
            request.to_string(),
            "{DBInstanceIdentifier: orders-db, VpcSecurityGroupIds: [sg-1, sg-2], AutoMinorVersionUpgrade: true}"
        );
    }
}
